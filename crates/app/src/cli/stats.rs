use clap::Args;
use domestic_connect_app::domain::{
    contact_access::{ContactAccessService, PgContactAccessService},
    packages::{PackagesService, PgPackagesService},
    purchases::{PgPurchasesService, PurchasesService},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct StatsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: StatsArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    let packages = PgPackagesService::new(db.clone())
        .count_packages()
        .await
        .map_err(|error| format!("failed to count packages: {error}"))?;

    let summary = PgPurchasesService::new(db.clone())
        .purchase_summary()
        .await
        .map_err(|error| format!("failed to summarise purchases: {error}"))?;

    let grants = PgContactAccessService::new(db)
        .count_grants()
        .await
        .map_err(|error| format!("failed to count contact unlocks: {error}"))?;

    println!("packages: {packages}");
    println!("purchases: {}", summary.total_purchases);
    println!("revenue: {}", summary.total_revenue);
    println!("contact_unlocks: {grants}");

    Ok(())
}
