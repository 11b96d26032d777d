//! List Contact Access Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use domestic_connect_app::domain::contact_access::records::ContactAccessRecord;

use crate::{contact_access::errors::into_status_error, extensions::*, state::State};

/// Contact Access Grant Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GrantResponse {
    pub access_id: String,
    pub target_profile_id: String,
    pub accessed_at: String,
}

impl From<ContactAccessRecord> for GrantResponse {
    fn from(grant: ContactAccessRecord) -> Self {
        Self {
            access_id: grant.id.into_string(),
            target_profile_id: grant.target_profile_id.into_string(),
            accessed_at: grant.accessed_at.to_string(),
        }
    }
}

/// Contact Access Grants Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GrantsResponse {
    /// Contacts the caller has unlocked, newest first
    pub grants: Vec<GrantResponse>,
}

/// List Contact Access Handler
#[endpoint(
    tags("contact-access"),
    summary = "List Unlocked Contacts",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<GrantsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let grants = state
        .app
        .contact_access
        .list_grants_for_user(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(GrantsResponse {
        grants: grants.into_iter().map(GrantResponse::from).collect(),
    }))
}
