//! Unlock Contact Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use domestic_connect_app::domain::identities::ProfileId;

use crate::{
    contact_access::errors::into_status_error, extensions::*, observability, state::State,
};

/// Unlock Contact Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UnlockContactRequest {
    /// Worker profile whose contact should be revealed
    pub target_profile_id: String,
}

/// Unlock Contact Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UnlockContactResponse {
    /// Grant identifier
    pub access_id: String,

    /// `true` when this request created the grant
    pub granted: bool,
}

/// Unlock Contact Handler
///
/// Grants the caller access to a worker's contact. Repeating the request
/// returns the existing grant.
#[endpoint(
    tags("contact-access"),
    summary = "Unlock Contact",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Contact unlocked"),
        (status_code = StatusCode::OK, description = "Contact was already unlocked"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UnlockContactRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UnlockContactResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let target = ProfileId::new(json.into_inner().target_profile_id);

    let unlock = state
        .app
        .contact_access
        .unlock_contact(user, target)
        .await
        .map_err(into_status_error)?;

    observability::record_unlock(unlock.granted);

    if unlock.granted {
        res.status_code(StatusCode::CREATED);
    }

    Ok(Json(UnlockContactResponse {
        access_id: unlock.grant.id.into_string(),
        granted: unlock.granted,
    }))
}
