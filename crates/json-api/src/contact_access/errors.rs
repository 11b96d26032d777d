//! Errors

use salvo::http::StatusError;
use tracing::error;

use domestic_connect_app::domain::contact_access::ContactAccessServiceError;

pub(crate) fn into_status_error(error: ContactAccessServiceError) -> StatusError {
    match error {
        ContactAccessServiceError::InvalidInput => {
            StatusError::bad_request().brief("Invalid contact access payload")
        }
        ContactAccessServiceError::NotFound => {
            error!("contact access grant vanished during unlock");

            StatusError::internal_server_error()
        }
        ContactAccessServiceError::Sql(source) => {
            error!("contact access storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
