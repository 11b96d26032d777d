//! Purchases service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        identities::UserId,
        purchases::{
            data::NewPurchase,
            errors::PurchasesServiceError,
            records::{PurchaseId, PurchaseRecord, PurchaseStatus, PurchaseSummary},
            repository::PgPurchasesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgPurchasesService {
    db: Db,
    repository: PgPurchasesRepository,
}

impl PgPurchasesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPurchasesRepository::new(),
        }
    }
}

#[async_trait]
impl PurchasesService for PgPurchasesService {
    async fn record_purchase(
        &self,
        purchase: NewPurchase,
    ) -> Result<PurchaseRecord, PurchasesServiceError> {
        purchase.validate()?;

        let mut tx = self.db.begin().await?;

        if !self
            .repository
            .package_exists(&mut tx, &purchase.package_id)
            .await?
        {
            return Err(PurchasesServiceError::NotFound);
        }

        let created = self
            .repository
            .create_purchase(
                &mut tx,
                PurchaseId::generate(),
                PurchaseStatus::Completed,
                &purchase,
            )
            .await?;

        tx.commit().await?;

        info!(
            purchase_id = %created.id,
            user_id = %created.user_id,
            package_id = %created.package_id,
            amount = %created.amount,
            "recorded purchase"
        );

        Ok(created)
    }

    async fn list_purchases_for_user(
        &self,
        user: UserId,
    ) -> Result<Vec<PurchaseRecord>, PurchasesServiceError> {
        let mut tx = self.db.begin().await?;

        let purchases = self
            .repository
            .list_purchases_for_user(&mut tx, &user)
            .await?;

        tx.commit().await?;

        Ok(purchases)
    }

    async fn purchase_summary(&self) -> Result<PurchaseSummary, PurchasesServiceError> {
        let mut tx = self.db.begin().await?;

        let summary = self.repository.purchase_summary(&mut tx).await?;

        tx.commit().await?;

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait PurchasesService: Send + Sync {
    /// Records a completed purchase of an existing package.
    ///
    /// Callers must have confirmed payment out-of-band. Not idempotent: every
    /// call creates a new ledger row.
    async fn record_purchase(
        &self,
        purchase: NewPurchase,
    ) -> Result<PurchaseRecord, PurchasesServiceError>;

    /// All purchases owned by the user, newest first.
    async fn list_purchases_for_user(
        &self,
        user: UserId,
    ) -> Result<Vec<PurchaseRecord>, PurchasesServiceError>;

    /// Purchase count and revenue across the whole ledger.
    async fn purchase_summary(&self) -> Result<PurchaseSummary, PurchasesServiceError>;
}
