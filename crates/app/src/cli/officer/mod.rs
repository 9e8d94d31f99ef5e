use clap::{Args, Subcommand};

mod delete;
mod get;

#[derive(Debug, Args)]
pub(crate) struct OfficerCommand {
    #[command(subcommand)]
    command: OfficerSubcommand,
}

#[derive(Debug, Subcommand)]
enum OfficerSubcommand {
    Get(get::GetOfficerArgs),
    Delete(delete::DeleteOfficerArgs),
}

pub(crate) async fn run(command: OfficerCommand) -> Result<(), String> {
    match command.command {
        OfficerSubcommand::Get(args) => get::run(args).await,
        OfficerSubcommand::Delete(args) => delete::run(args).await,
    }
}
