use clap::Args;
use domestic_connect_app::domain::identities::UserId;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// User the token authenticates as
    #[arg(long)]
    user_id: String,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let service = super::auth_service(&args.database).await?;

    let issued = service
        .issue_api_token(UserId::new(args.user_id))
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_id: {}", issued.metadata.id);
    println!("user_id: {}", issued.metadata.user_id);
    println!("token_version: {}", issued.metadata.version.as_i16());
    println!("token_created_at: {}", issued.metadata.created_at);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
