//! Database connection management

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError, postgres::PgPoolOptions};

/// Error raised by the storage layer, carried by every service's `Sql` variant.
pub use sqlx::Error as StorageError;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// SQLSTATE `string_data_right_truncation` and `numeric_value_out_of_range`.
const VALUE_TOO_LARGE_CODES: [&str; 2] = ["22001", "22003"];

/// Largest amount a `NUMERIC(12, 2)` money column holds.
#[must_use]
pub fn max_money() -> Decimal {
    Decimal::new(9_999_999_999_99, 2)
}

/// Whether Postgres rejected a value for being too long or too large for its column.
pub(crate) fn is_value_too_large(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|database_error| database_error.code())
        .is_some_and(|code| VALUE_TOO_LARGE_CODES.contains(&code.as_ref()))
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction.
    ///
    /// Dropping the transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or `BEGIN` fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::database_error;

    #[test]
    fn oversized_value_codes_are_recognised() {
        assert!(is_value_too_large(&database_error("22001")));
        assert!(is_value_too_large(&database_error("22003")));
    }

    #[test]
    fn other_errors_are_not_oversized_values() {
        assert!(!is_value_too_large(&database_error("23505")));
        assert!(!is_value_too_large(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn max_money_fits_twelve_digits() {
        assert_eq!(max_money().to_string(), "9999999999.99");
    }
}
