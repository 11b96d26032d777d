use clap::{Args, Subcommand};
use domestic_connect_app::auth::PgAuthService;

use crate::cli::DatabaseArgs;

mod create;
mod list;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue a bearer token for a user
    Create(create::CreateTokenArgs),

    /// List a user's tokens
    List(list::ListTokensArgs),

    /// Revoke a token
    Revoke(revoke::RevokeTokenArgs),
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Create(args) => create::run(args).await,
        TokenSubcommand::List(args) => list::run(args).await,
        TokenSubcommand::Revoke(args) => revoke::run(args).await,
    }
}

async fn auth_service(database: &DatabaseArgs) -> Result<PgAuthService, String> {
    let db = database.connect().await?;

    Ok(PgAuthService::new(db.pool().clone()))
}
