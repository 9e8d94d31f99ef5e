use clap::{Parser, Subcommand};

mod db;
mod officer;

#[derive(Debug, Parser)]
#[command(name = "disqualified-officers", about = "Disqualified officers data CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Officer(officer::OfficerCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Officer(command) => officer::run(command).await,
        }
    }
}
