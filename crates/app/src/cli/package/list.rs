use clap::Args;
use domestic_connect_app::domain::packages::PackagesService;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListPackagesArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListPackagesArgs) -> Result<(), String> {
    let service = args.database.packages().await?;

    let packages = service
        .list_packages()
        .await
        .map_err(|error| format!("failed to list packages: {error}"))?;

    if packages.is_empty() {
        println!("no packages found");
        return Ok(());
    }

    for package in &packages {
        super::print_package(package);
        println!();
    }

    Ok(())
}
