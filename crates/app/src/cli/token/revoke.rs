use clap::Args;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Token id to revoke
    #[arg(long)]
    token_id: Uuid,
}

pub(crate) async fn run(args: RevokeTokenArgs) -> Result<(), String> {
    let service = super::auth_service(&args.database).await?;

    let revoked = service
        .revoke_api_token(args.token_id)
        .await
        .map_err(|error| format!("failed to revoke token: {error}"))?;

    if revoked {
        println!("revoked token {}", args.token_id);
    } else {
        println!("token {} was not active", args.token_id);
    }

    Ok(())
}
