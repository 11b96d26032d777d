//! Packages service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::database::is_value_too_large;

#[derive(Debug, Error)]
pub enum PackagesServiceError {
    #[error("package already exists")]
    AlreadyExists,

    #[error("package not found")]
    NotFound,

    #[error("invalid package data")]
    InvalidInput,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PackagesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if is_value_too_large(&error) {
            return Self::InvalidInput;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
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
            let error = PackagesServiceError::from(database_error(code));

            assert!(
                matches!(error, PackagesServiceError::InvalidInput),
                "SQLSTATE {code} should be a caller error, got {error:?}"
            );
        }
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = PackagesServiceError::from(Error::RowNotFound);

        assert!(matches!(error, PackagesServiceError::NotFound));
    }

    #[test]
    fn pool_errors_map_to_sql() {
        let error = PackagesServiceError::from(Error::PoolTimedOut);

        assert!(matches!(error, PackagesServiceError::Sql(_)));
    }
}
