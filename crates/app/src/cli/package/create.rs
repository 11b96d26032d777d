use clap::Args;
use domestic_connect_app::domain::packages::{
    PackagesService,
    data::NewPackage,
    records::PackageId,
};
use rust_decimal::Decimal;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreatePackageArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Package identifier, e.g. `pkg_basic`
    #[arg(long)]
    id: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Optional description
    #[arg(long)]
    description: Option<String>,

    /// Price in the major currency unit
    #[arg(long)]
    price: Decimal,

    /// Number of contact unlocks the package buys
    #[arg(long)]
    contacts: u32,
}

pub(crate) async fn run(args: CreatePackageArgs) -> Result<(), String> {
    let service = args.database.packages().await?;

    let package = service
        .create_package(NewPackage {
            id: PackageId::new(args.id),
            name: args.name,
            description: args.description,
            price: args.price,
            contacts_included: args.contacts,
        })
        .await
        .map_err(|error| format!("failed to create package: {error}"))?;

    super::print_package(&package);

    Ok(())
}
