//! List Packages Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    packages::{errors::into_status_error, handlers::PackageResponse},
    state::State,
};

/// Packages Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackagesResponse {
    /// Active packages, cheapest first
    pub packages: Vec<PackageResponse>,
}

/// List Packages Handler
///
/// Returns the packages currently on sale.
#[endpoint(tags("packages"), summary = "List Packages")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PackagesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let packages = state
        .app
        .packages
        .list_active_packages()
        .await
        .map_err(into_status_error)?;

    Ok(Json(PackagesResponse {
        packages: packages.into_iter().map(PackageResponse::from).collect(),
    }))
}
