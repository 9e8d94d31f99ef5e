use clap::Args;
use disqualified_officers_app::{
    context::AppContext, domain::disqualifications::models::OfficerType, notifier::ChsKafkaConfig,
};

#[derive(Debug, Args)]
pub(crate) struct GetOfficerArgs {
    /// Officer id to look up
    #[arg(long)]
    officer_id: String,

    /// Officer type, natural or corporate
    #[arg(long)]
    officer_type: OfficerType,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Base URL of the chs-kafka-api
    #[arg(long, env = "CHS_KAFKA_API_URL", default_value = "http://localhost:5011")]
    chs_kafka_api_url: String,
}

pub(crate) async fn run(args: GetOfficerArgs) -> Result<(), String> {
    let context = AppContext::from_config(
        &args.database_url,
        ChsKafkaConfig {
            base_url: args.chs_kafka_api_url,
        },
    )
    .await
    .map_err(|error| format!("failed to initialise application context: {error}"))?;

    let record = match args.officer_type {
        OfficerType::Natural => context.disqualifications.get_natural(&args.officer_id).await,
        OfficerType::Corporate => {
            context
                .disqualifications
                .get_corporate(&args.officer_id)
                .await
        }
    }
    .map_err(|error| format!("failed to fetch disqualification: {error}"))?;

    let rendered = serde_json::to_string_pretty(&record)
        .map_err(|error| format!("failed to render record: {error}"))?;

    println!("{rendered}");

    Ok(())
}
