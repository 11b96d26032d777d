//! Packages service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::packages::{
        data::{NewPackage, default_packages},
        errors::PackagesServiceError,
        records::{PackageId, PackageRecord},
        repository::PgPackagesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPackagesService {
    db: Db,
    repository: PgPackagesRepository,
}

impl PgPackagesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPackagesRepository::new(),
        }
    }
}

#[async_trait]
impl PackagesService for PgPackagesService {
    async fn list_active_packages(&self) -> Result<Vec<PackageRecord>, PackagesServiceError> {
        let mut tx = self.db.begin().await?;

        let packages = self.repository.list_active_packages(&mut tx).await?;

        tx.commit().await?;

        Ok(packages)
    }

    async fn list_packages(&self) -> Result<Vec<PackageRecord>, PackagesServiceError> {
        let mut tx = self.db.begin().await?;

        let packages = self.repository.list_packages(&mut tx).await?;

        tx.commit().await?;

        Ok(packages)
    }

    async fn get_package(&self, package: PackageId) -> Result<PackageRecord, PackagesServiceError> {
        let mut tx = self.db.begin().await?;

        let package = self.repository.get_package(&mut tx, &package).await?;

        tx.commit().await?;

        Ok(package)
    }

    async fn create_package(
        &self,
        package: NewPackage,
    ) -> Result<PackageRecord, PackagesServiceError> {
        package.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_package(&mut tx, &package).await?;

        tx.commit().await?;

        info!(package_id = %created.id, "created package");

        Ok(created)
    }

    async fn set_package_active(
        &self,
        package: PackageId,
        active: bool,
    ) -> Result<PackageRecord, PackagesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .set_package_active(&mut tx, &package, active)
            .await?;

        tx.commit().await?;

        info!(package_id = %updated.id, active, "updated package availability");

        Ok(updated)
    }

    async fn seed_default_packages(&self) -> Result<Vec<PackageRecord>, PackagesServiceError> {
        let mut tx = self.db.begin().await?;
        let mut seeded = Vec::new();

        for package in default_packages() {
            if let Some(created) = self.repository.seed_package(&mut tx, &package).await? {
                seeded.push(created);
            }
        }

        tx.commit().await?;

        info!(seeded = seeded.len(), "seeded default packages");

        Ok(seeded)
    }

    async fn count_packages(&self) -> Result<u64, PackagesServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_packages(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait PackagesService: Send + Sync {
    /// Packages currently on sale, cheapest first.
    async fn list_active_packages(&self) -> Result<Vec<PackageRecord>, PackagesServiceError>;

    /// Every package, including deactivated ones.
    async fn list_packages(&self) -> Result<Vec<PackageRecord>, PackagesServiceError>;

    /// Retrieve a single package, active or not.
    async fn get_package(&self, package: PackageId) -> Result<PackageRecord, PackagesServiceError>;

    /// Adds a package to the catalog.
    async fn create_package(
        &self,
        package: NewPackage,
    ) -> Result<PackageRecord, PackagesServiceError>;

    /// Toggles catalog visibility. No other field of a package is ever updated.
    async fn set_package_active(
        &self,
        package: PackageId,
        active: bool,
    ) -> Result<PackageRecord, PackagesServiceError>;

    /// Inserts the default catalog, skipping ids that already exist.
    async fn seed_default_packages(&self) -> Result<Vec<PackageRecord>, PackagesServiceError>;

    async fn count_packages(&self) -> Result<u64, PackagesServiceError>;
}
