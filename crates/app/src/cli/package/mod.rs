use clap::{Args, Subcommand};
use domestic_connect_app::domain::packages::records::PackageRecord;

mod create;
mod list;
mod seed;
mod toggle;

#[derive(Debug, Args)]
pub(crate) struct PackageCommand {
    #[command(subcommand)]
    command: PackageSubcommand,
}

#[derive(Debug, Subcommand)]
enum PackageSubcommand {
    /// Add a package to the catalog
    Create(create::CreatePackageArgs),

    /// List every package, active or not
    List(list::ListPackagesArgs),

    /// Put a package back on sale
    Activate(toggle::TogglePackageArgs),

    /// Hide a package from the catalog
    Deactivate(toggle::TogglePackageArgs),

    /// Insert the default Basic, Premium and Enterprise packages
    Seed(seed::SeedPackagesArgs),
}

pub(crate) async fn run(command: PackageCommand) -> Result<(), String> {
    match command.command {
        PackageSubcommand::Create(args) => create::run(args).await,
        PackageSubcommand::List(args) => list::run(args).await,
        PackageSubcommand::Activate(args) => toggle::run(args, true).await,
        PackageSubcommand::Deactivate(args) => toggle::run(args, false).await,
        PackageSubcommand::Seed(args) => seed::run(args).await,
    }
}

fn print_package(package: &PackageRecord) {
    println!("package_id: {}", package.id);
    println!("name: {}", package.name);
    if let Some(description) = &package.description {
        println!("description: {description}");
    }
    println!("price: {}", package.price);
    println!("contacts_included: {}", package.contacts_included);
    println!("active: {}", package.is_active);
    println!("created_at: {}", package.created_at);
}
