//! Contact access service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::database::is_value_too_large;

#[derive(Debug, Error)]
pub enum ContactAccessServiceError {
    #[error("contact access grant not found")]
    NotFound,

    #[error("invalid contact access data")]
    InvalidInput,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ContactAccessServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if is_value_too_large(&error) {
            return Self::InvalidInput;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidInput,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::database_error;

    #[test]
    fn oversized_values_map_to_invalid_input() {
        for code in ["22001", "22003"] {
            let error = ContactAccessServiceError::from(database_error(code));

            assert!(
                matches!(error, ContactAccessServiceError::InvalidInput),
                "SQLSTATE {code} should be a caller error, got {error:?}"
            );
        }
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            ContactAccessServiceError::from(Error::RowNotFound),
            ContactAccessServiceError::NotFound
        ));
    }

    #[test]
    fn pool_errors_map_to_sql() {
        assert!(matches!(
            ContactAccessServiceError::from(Error::PoolClosed),
            ContactAccessServiceError::Sql(_)
        ));
    }
}
