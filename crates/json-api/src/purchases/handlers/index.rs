//! List Purchases Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use domestic_connect_app::domain::purchases::records::PurchaseRecord;

use crate::{
    extensions::*, packages::format_money, purchases::errors::into_status_error, state::State,
};

/// Purchase Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PurchaseResponse {
    pub id: String,
    pub package_id: String,
    pub package_name: String,

    /// Amount paid as a decimal string
    pub amount: String,

    /// `completed`, `pending` or `failed`
    pub status: String,
    pub payment_reference: Option<String>,
    pub purchase_date: String,
}

impl From<PurchaseRecord> for PurchaseResponse {
    fn from(purchase: PurchaseRecord) -> Self {
        Self {
            id: purchase.id.into_string(),
            package_id: purchase.package_id.into_string(),
            package_name: purchase.package_name,
            amount: format_money(purchase.amount),
            status: purchase.status.to_string(),
            payment_reference: purchase.payment_reference,
            purchase_date: purchase.purchase_date.to_string(),
        }
    }
}

/// Purchases Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PurchasesResponse {
    /// The caller's purchases, newest first
    pub purchases: Vec<PurchaseResponse>,
}

/// List Purchases Handler
///
/// Returns the authenticated user's purchase history.
#[endpoint(
    tags("purchases"),
    summary = "List Purchases",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PurchasesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let purchases = state
        .app
        .purchases
        .list_purchases_for_user(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(PurchasesResponse {
        purchases: purchases.into_iter().map(PurchaseResponse::from).collect(),
    }))
}
