//! Purchases Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    identities::UserId,
    packages::records::PackageId,
    purchases::{
        data::NewPurchase,
        records::{PurchaseId, PurchaseRecord, PurchaseStatus, PurchaseSummary},
    },
};

const PACKAGE_EXISTS_SQL: &str = include_str!("sql/package_exists.sql");
const CREATE_PURCHASE_SQL: &str = include_str!("sql/create_purchase.sql");
const LIST_PURCHASES_FOR_USER_SQL: &str = include_str!("sql/list_purchases_for_user.sql");
const PURCHASE_SUMMARY_SQL: &str = include_str!("sql/purchase_summary.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPurchasesRepository;

impl PgPurchasesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn package_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        package: &PackageId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(PACKAGE_EXISTS_SQL)
            .bind(package.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_purchase(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: PurchaseId,
        status: PurchaseStatus,
        new: &NewPurchase,
    ) -> Result<PurchaseRecord, sqlx::Error> {
        query_as::<Postgres, PurchaseRecord>(CREATE_PURCHASE_SQL)
            .bind(purchase.as_str())
            .bind(new.user_id.as_str())
            .bind(new.package_id.as_str())
            .bind(new.amount)
            .bind(status.as_str())
            .bind(new.payment_reference.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_purchases_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<Vec<PurchaseRecord>, sqlx::Error> {
        query_as::<Postgres, PurchaseRecord>(LIST_PURCHASES_FOR_USER_SQL)
            .bind(user.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn purchase_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<PurchaseSummary, sqlx::Error> {
        let (total_purchases, total_revenue): (i64, Decimal) = query_as(PURCHASE_SUMMARY_SQL)
            .fetch_one(&mut **tx)
            .await?;

        let total_purchases =
            u64::try_from(total_purchases).map_err(|e| sqlx::Error::ColumnDecode {
                index: "total_purchases".to_string(),
                source: Box::new(e),
            })?;

        Ok(PurchaseSummary {
            total_purchases,
            total_revenue,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PurchaseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<PurchaseStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: PurchaseId::new(row.try_get::<String, _>("id")?),
            user_id: UserId::new(row.try_get::<String, _>("user_id")?),
            package_id: PackageId::new(row.try_get::<String, _>("package_id")?),
            package_name: row.try_get("package_name")?,
            amount: row.try_get("amount")?,
            status,
            payment_reference: row.try_get("payment_reference")?,
            purchase_date: row.try_get::<SqlxTimestamp, _>("purchase_date")?.to_jiff(),
        })
    }
}
