//! Errors

use salvo::http::StatusError;
use tracing::error;

use domestic_connect_app::domain::packages::PackagesServiceError;

pub(crate) fn into_status_error(error: PackagesServiceError) -> StatusError {
    match error {
        PackagesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Package already exists")
        }
        PackagesServiceError::InvalidInput => {
            StatusError::bad_request().brief("Invalid package payload")
        }
        PackagesServiceError::NotFound => StatusError::not_found().brief("Package not found"),
        PackagesServiceError::Sql(source) => {
            error!("package storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
