//! Contact access service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        contact_access::{
            errors::ContactAccessServiceError,
            records::{ContactAccessId, ContactAccessRecord, ContactUnlock},
            repository::PgContactAccessRepository,
        },
        identities::{ProfileId, UserId},
    },
};

#[derive(Debug, Clone)]
pub struct PgContactAccessService {
    db: Db,
    repository: PgContactAccessRepository,
}

impl PgContactAccessService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgContactAccessRepository::new(),
        }
    }
}

fn validate_pair(user: &UserId, target: &ProfileId) -> Result<(), ContactAccessServiceError> {
    if user.is_valid() && target.is_valid() {
        Ok(())
    } else {
        Err(ContactAccessServiceError::InvalidInput)
    }
}

#[async_trait]
impl ContactAccessService for PgContactAccessService {
    async fn unlock_contact(
        &self,
        user: UserId,
        target: ProfileId,
    ) -> Result<ContactUnlock, ContactAccessServiceError> {
        validate_pair(&user, &target)?;

        let mut tx = self.db.begin().await?;

        if let Some(grant) = self
            .repository
            .find_contact_access(&mut tx, &user, &target)
            .await?
        {
            tx.commit().await?;

            debug!(access_id = %grant.id, "contact already unlocked");

            return Ok(ContactUnlock {
                granted: false,
                grant,
            });
        }

        let inserted = self
            .repository
            .insert_contact_access(&mut tx, &ContactAccessId::generate(), &user, &target)
            .await?;

        let unlock = match inserted {
            Some(grant) => ContactUnlock {
                granted: true,
                grant,
            },
            None => {
                // Lost the race to a concurrent unlock; return the winner's grant.
                let grant = self
                    .repository
                    .find_contact_access(&mut tx, &user, &target)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;

                ContactUnlock {
                    granted: false,
                    grant,
                }
            }
        };

        tx.commit().await?;

        if unlock.granted {
            info!(
                access_id = %unlock.grant.id,
                user_id = %user,
                target_profile_id = %target,
                "unlocked contact"
            );
        }

        Ok(unlock)
    }

    async fn has_access(
        &self,
        user: UserId,
        target: ProfileId,
    ) -> Result<bool, ContactAccessServiceError> {
        // A pair that could never be stored has no grant.
        if validate_pair(&user, &target).is_err() {
            return Ok(false);
        }

        let mut tx = self.db.begin().await?;

        let exists = self
            .repository
            .has_contact_access(&mut tx, &user, &target)
            .await?;

        tx.commit().await?;

        Ok(exists)
    }

    async fn list_grants_for_user(
        &self,
        user: UserId,
    ) -> Result<Vec<ContactAccessRecord>, ContactAccessServiceError> {
        let mut tx = self.db.begin().await?;

        let grants = self
            .repository
            .list_contact_access_for_user(&mut tx, &user)
            .await?;

        tx.commit().await?;

        Ok(grants)
    }

    async fn count_grants(&self) -> Result<u64, ContactAccessServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_contact_access(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait ContactAccessService: Send + Sync {
    /// Returns the existing grant for the pair, or creates one.
    ///
    /// Idempotent: at most one grant ever exists per `(user, target)`, and
    /// `granted` is `true` only for the call that created it. Purchased quota
    /// is not consulted.
    async fn unlock_contact(
        &self,
        user: UserId,
        target: ProfileId,
    ) -> Result<ContactUnlock, ContactAccessServiceError>;

    /// Whether a grant exists for the pair; blank or overlong ids simply have none.
    async fn has_access(
        &self,
        user: UserId,
        target: ProfileId,
    ) -> Result<bool, ContactAccessServiceError>;

    /// Contacts the user has unlocked, newest first.
    async fn list_grants_for_user(
        &self,
        user: UserId,
    ) -> Result<Vec<ContactAccessRecord>, ContactAccessServiceError>;

    async fn count_grants(&self) -> Result<u64, ContactAccessServiceError>;
}
