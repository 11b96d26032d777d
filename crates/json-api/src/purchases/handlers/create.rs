//! Record Purchase Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use domestic_connect_app::domain::{
    identities::UserId, packages::records::PackageId, purchases::data::NewPurchase,
};

use crate::{
    extensions::*, observability, purchases::errors::into_status_error, state::State,
};

/// Record Purchase Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePurchaseRequest {
    /// Purchased package
    pub package_id: String,

    /// Amount paid in the major currency unit, as a JSON number or decimal string
    #[salvo(schema(value_type = String))]
    pub amount: Decimal,

    /// Reference issued by the payment processor
    pub payment_reference: Option<String>,
}

impl CreatePurchaseRequest {
    fn into_new_purchase(self, user: UserId) -> NewPurchase {
        NewPurchase {
            user_id: user,
            package_id: PackageId::new(self.package_id),
            amount: self.amount.round_dp(2),
            payment_reference: self.payment_reference,
        }
    }
}

/// Purchase Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PurchaseCreatedResponse {
    /// Created purchase identifier
    pub purchase_id: String,
}

/// Record Purchase Handler
///
/// Records a completed purchase after the payment has been confirmed.
#[endpoint(
    tags("purchases"),
    summary = "Record Purchase",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Purchase recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Package not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePurchaseRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PurchaseCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let purchase = json.into_inner().into_new_purchase(user);

    let purchase_id = state
        .app
        .purchases
        .record_purchase(purchase)
        .await
        .map_err(into_status_error)?
        .id
        .into_string();

    observability::record_purchase();

    res.add_header(LOCATION, format!("/purchases/{purchase_id}"), true)
        .map_err(|source| {
            error!("failed to set location header: {source}");

            StatusError::internal_server_error()
        })?
        .status_code(StatusCode::CREATED);

    Ok(Json(PurchaseCreatedResponse { purchase_id }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use domestic_connect_app::domain::purchases::{MockPurchasesService, PurchasesServiceError};

    use crate::{purchases::handlers::tests::make_purchase, test_helpers::Mocks};

    use super::*;

    fn make_service(purchases: MockPurchasesService) -> Service {
        Mocks {
            purchases,
            ..Mocks::default()
        }
        .into_user_service(Router::with_path("purchases").post(handler))
    }

    #[tokio::test]
    async fn test_create_purchase_returns_201() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_record_purchase()
            .once()
            .withf(|new| {
                *new == NewPurchase {
                    user_id: UserId::from("u1"),
                    package_id: PackageId::from("pkg_basic"),
                    amount: Decimal::new(500, 0),
                    payment_reference: Some("MPESA123".to_string()),
                }
            })
            .return_once(|_| Ok(make_purchase("p1", "pkg_basic", Decimal::new(500, 0))));

        let mut res = TestClient::post("http://example.com/purchases")
            .json(&json!({
                "package_id": "pkg_basic",
                "amount": 500.0,
                "payment_reference": "MPESA123",
            }))
            .send(&make_service(purchases))
            .await;

        let body: PurchaseCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/purchases/p1"));
        assert_eq!(body.purchase_id, "p1");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_unknown_package_returns_404() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_record_purchase()
            .once()
            .return_once(|_| Err(PurchasesServiceError::NotFound));

        let res = TestClient::post("http://example.com/purchases")
            .json(&json!({ "package_id": "pkg_missing", "amount": 500.0 }))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_invalid_amount_returns_400() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_record_purchase()
            .once()
            .return_once(|_| Err(PurchasesServiceError::InvalidInput));

        let res = TestClient::post("http://example.com/purchases")
            .json(&json!({ "package_id": "pkg_basic", "amount": -1.0 }))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_missing_package_field_returns_400() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases.expect_record_purchase().never();

        let res = TestClient::post("http://example.com/purchases")
            .json(&json!({ "amount": 500.0 }))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_accepts_decimal_string_amount() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_record_purchase()
            .once()
            .withf(|new| new.amount == Decimal::new(1500_10, 2))
            .return_once(|_| Ok(make_purchase("p2", "pkg_premium", Decimal::new(1500_10, 2))));

        let res = TestClient::post("http://example.com/purchases")
            .json(&json!({ "package_id": "pkg_premium", "amount": "1500.10" }))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_non_numeric_amount_returns_400() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases.expect_record_purchase().never();

        let res = TestClient::post("http://example.com/purchases")
            .json(&json!({ "package_id": "pkg_basic", "amount": "five hundred" }))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[test]
    fn amount_is_rounded_to_cents() {
        let request = CreatePurchaseRequest {
            package_id: "pkg_basic".to_string(),
            amount: Decimal::new(1500_004, 3),
            payment_reference: None,
        };

        let purchase = request.into_new_purchase(UserId::from("u1"));

        assert_eq!(purchase.amount, Decimal::new(1500, 0));
    }
}
