//! Contact Access Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    contact_access::records::{ContactAccessId, ContactAccessRecord},
    identities::{ProfileId, UserId},
};

const FIND_CONTACT_ACCESS_SQL: &str = include_str!("sql/find_contact_access.sql");
const INSERT_CONTACT_ACCESS_SQL: &str = include_str!("sql/insert_contact_access.sql");
const HAS_CONTACT_ACCESS_SQL: &str = include_str!("sql/has_contact_access.sql");
const LIST_CONTACT_ACCESS_FOR_USER_SQL: &str = include_str!("sql/list_contact_access_for_user.sql");
const COUNT_CONTACT_ACCESS_SQL: &str = include_str!("sql/count_contact_access.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgContactAccessRepository;

impl PgContactAccessRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_contact_access(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        target: &ProfileId,
    ) -> Result<Option<ContactAccessRecord>, sqlx::Error> {
        query_as::<Postgres, ContactAccessRecord>(FIND_CONTACT_ACCESS_SQL)
            .bind(user.as_str())
            .bind(target.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Inserts a grant unless one already exists for the pair.
    ///
    /// Returns `None` when another writer holds the `(user_id, target_profile_id)` slot.
    pub(crate) async fn insert_contact_access(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        grant: &ContactAccessId,
        user: &UserId,
        target: &ProfileId,
    ) -> Result<Option<ContactAccessRecord>, sqlx::Error> {
        query_as::<Postgres, ContactAccessRecord>(INSERT_CONTACT_ACCESS_SQL)
            .bind(grant.as_str())
            .bind(user.as_str())
            .bind(target.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn has_contact_access(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        target: &ProfileId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(HAS_CONTACT_ACCESS_SQL)
            .bind(user.as_str())
            .bind(target.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_contact_access_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<Vec<ContactAccessRecord>, sqlx::Error> {
        query_as::<Postgres, ContactAccessRecord>(LIST_CONTACT_ACCESS_FOR_USER_SQL)
            .bind(user.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_contact_access(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_CONTACT_ACCESS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "grants_count".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ContactAccessRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ContactAccessId::new(row.try_get::<String, _>("id")?),
            user_id: UserId::new(row.try_get::<String, _>("user_id")?),
            target_profile_id: ProfileId::new(row.try_get::<String, _>("target_profile_id")?),
            accessed_at: row.try_get::<SqlxTimestamp, _>("accessed_at")?.to_jiff(),
        })
    }
}
