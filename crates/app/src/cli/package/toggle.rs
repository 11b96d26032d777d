use clap::Args;
use domestic_connect_app::domain::packages::{PackagesService, records::PackageId};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct TogglePackageArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Package identifier
    #[arg(long)]
    id: String,
}

pub(crate) async fn run(args: TogglePackageArgs, active: bool) -> Result<(), String> {
    let service = args.database.packages().await?;

    let package = service
        .set_package_active(PackageId::new(args.id), active)
        .await
        .map_err(|error| format!("failed to update package: {error}"))?;

    super::print_package(&package);

    Ok(())
}
