use clap::Args;
use domestic_connect_app::domain::packages::PackagesService;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SeedPackagesArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: SeedPackagesArgs) -> Result<(), String> {
    let service = args.database.packages().await?;

    let seeded = service
        .seed_default_packages()
        .await
        .map_err(|error| format!("failed to seed packages: {error}"))?;

    if seeded.is_empty() {
        println!("default packages already present");
    }

    for package in seeded {
        println!("seeded {} ({})", package.id, package.name);
    }

    Ok(())
}
