use clap::Args;
use disqualified_officers_app::{
    context::AppContext,
    domain::disqualifications::{delta::DeltaAt, models::DeleteRequestParameters},
    notifier::ChsKafkaConfig,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct DeleteOfficerArgs {
    /// Officer id to delete
    #[arg(long)]
    officer_id: String,

    /// Officer type, natural or corporate
    #[arg(long)]
    officer_type: String,

    /// Delta timestamp of the delete request, `yyyyMMddHHmmssSSSSSS`
    #[arg(long)]
    delta_at: String,

    /// Request context id; generated when omitted
    #[arg(long)]
    context_id: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Base URL of the chs-kafka-api
    #[arg(long, env = "CHS_KAFKA_API_URL", default_value = "http://localhost:5011")]
    chs_kafka_api_url: String,
}

pub(crate) async fn run(args: DeleteOfficerArgs) -> Result<(), String> {
    let context = AppContext::from_config(
        &args.database_url,
        ChsKafkaConfig {
            base_url: args.chs_kafka_api_url,
        },
    )
    .await
    .map_err(|error| format!("failed to initialise application context: {error}"))?;

    let context_id = args
        .context_id
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    context
        .disqualifications
        .delete(DeleteRequestParameters {
            context_id: context_id.clone(),
            officer_type: args.officer_type,
            officer_id: args.officer_id.clone(),
            request_delta_at: DeltaAt::new(args.delta_at),
        })
        .await
        .map_err(|error| format!("failed to delete disqualification: {error}"))?;

    println!("deleted disqualification: {}", args.officer_id);
    println!("context_id: {context_id}");

    Ok(())
}
