use clap::Args;
use disqualified_officers_app::database;

#[derive(Debug, Args)]
pub(crate) struct EnsureSchemaArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: EnsureSchemaArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::ensure_schema(&pool)
        .await
        .map_err(|error| format!("failed to ensure schema: {error}"))?;

    println!("ensured disqualifications schema");

    Ok(())
}
