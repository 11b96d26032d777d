use clap::{Args, Parser, Subcommand};
use domestic_connect_app::{
    database::{self, Db},
    domain::packages::PgPackagesService,
};

mod db;
mod package;
mod stats;
mod token;

#[derive(Debug, Parser)]
#[command(name = "domestic-connect", about = "Domestic Connect admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the package catalog
    Package(package::PackageCommand),

    /// Manage bearer API tokens
    Token(token::TokenCommand),

    /// Print payment and unlock statistics
    Stats(stats::StatsArgs),

    /// Database maintenance
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Package(command) => package::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Stats(args) => stats::run(args).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

/// Connection arguments shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub(crate) database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        database::connect(&self.database_url)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }

    pub(crate) async fn packages(&self) -> Result<PgPackagesService, String> {
        self.connect().await.map(PgPackagesService::new)
    }
}
