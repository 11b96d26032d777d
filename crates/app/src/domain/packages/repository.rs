//! Packages Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::packages::{
    data::NewPackage,
    records::{PackageId, PackageRecord},
};

const LIST_ACTIVE_PACKAGES_SQL: &str = include_str!("sql/list_active_packages.sql");
const LIST_PACKAGES_SQL: &str = include_str!("sql/list_packages.sql");
const GET_PACKAGE_SQL: &str = include_str!("sql/get_package.sql");
const CREATE_PACKAGE_SQL: &str = include_str!("sql/create_package.sql");
const SEED_PACKAGE_SQL: &str = include_str!("sql/seed_package.sql");
const SET_PACKAGE_ACTIVE_SQL: &str = include_str!("sql/set_package_active.sql");
const COUNT_PACKAGES_SQL: &str = include_str!("sql/count_packages.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPackagesRepository;

impl PgPackagesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_active_packages(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PackageRecord>, sqlx::Error> {
        query_as::<Postgres, PackageRecord>(LIST_ACTIVE_PACKAGES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_packages(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PackageRecord>, sqlx::Error> {
        query_as::<Postgres, PackageRecord>(LIST_PACKAGES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_package(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        package: &PackageId,
    ) -> Result<PackageRecord, sqlx::Error> {
        query_as::<Postgres, PackageRecord>(GET_PACKAGE_SQL)
            .bind(package.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_package(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        package: &NewPackage,
    ) -> Result<PackageRecord, sqlx::Error> {
        query_as::<Postgres, PackageRecord>(CREATE_PACKAGE_SQL)
            .bind(package.id.as_str())
            .bind(&package.name)
            .bind(package.description.as_deref())
            .bind(package.price)
            .bind(contacts_to_i32(package.contacts_included)?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert unless the id is taken; `None` means the package already existed.
    pub(crate) async fn seed_package(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        package: &NewPackage,
    ) -> Result<Option<PackageRecord>, sqlx::Error> {
        query_as::<Postgres, PackageRecord>(SEED_PACKAGE_SQL)
            .bind(package.id.as_str())
            .bind(&package.name)
            .bind(package.description.as_deref())
            .bind(package.price)
            .bind(contacts_to_i32(package.contacts_included)?)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn set_package_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        package: &PackageId,
        active: bool,
    ) -> Result<PackageRecord, sqlx::Error> {
        query_as::<Postgres, PackageRecord>(SET_PACKAGE_ACTIVE_SQL)
            .bind(package.as_str())
            .bind(active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_packages(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_PACKAGES_SQL).fetch_one(&mut **tx).await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "packages_count".to_string(),
            source: Box::new(e),
        })
    }
}

fn contacts_to_i32(contacts_included: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(contacts_included).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

impl<'r> FromRow<'r, PgRow> for PackageRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let contacts_i32: i32 = row.try_get("contacts_included")?;

        let contacts_included =
            u32::try_from(contacts_i32).map_err(|e| sqlx::Error::ColumnDecode {
                index: "contacts_included".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: PackageId::new(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            contacts_included,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
