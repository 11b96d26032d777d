//! Purchases service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::database::is_value_too_large;

#[derive(Debug, Error)]
pub enum PurchasesServiceError {
    /// The referenced package does not exist.
    #[error("package not found")]
    NotFound,

    #[error("invalid purchase data")]
    InvalidInput,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PurchasesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if is_value_too_large(&error) {
            return Self::InvalidInput;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidInput,
            _ => Self::Sql(error),
        }
    }
}
