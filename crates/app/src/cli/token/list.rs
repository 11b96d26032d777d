use clap::Args;
use domestic_connect_app::domain::identities::UserId;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// User whose tokens should be listed
    #[arg(long)]
    user_id: String,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let service = super::auth_service(&args.database).await?;
    let user = UserId::new(args.user_id);

    let tokens = service
        .list_api_tokens(&user)
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens found for user {user}");
        return Ok(());
    }

    for token in tokens {
        println!("token_id: {}", token.id);
        println!("user_id: {}", token.user_id);
        println!("token_version: {}", token.version.as_i16());
        println!("created_at: {}", token.created_at);
        println!(
            "last_used_at: {}",
            token
                .last_used_at
                .map_or_else(|| "never".to_string(), |value| value.to_string())
        );
        println!(
            "revoked_at: {}",
            token
                .revoked_at
                .map_or_else(|| "active".to_string(), |value| value.to_string())
        );
        println!();
    }

    Ok(())
}
