//! Errors

use salvo::http::StatusError;
use tracing::error;

use domestic_connect_app::domain::purchases::PurchasesServiceError;

pub(crate) fn into_status_error(error: PurchasesServiceError) -> StatusError {
    match error {
        PurchasesServiceError::NotFound => StatusError::not_found().brief("Package not found"),
        PurchasesServiceError::InvalidInput => {
            StatusError::bad_request().brief("Invalid purchase payload")
        }
        PurchasesServiceError::Sql(source) => {
            error!("purchase storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
