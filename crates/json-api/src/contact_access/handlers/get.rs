//! Check Contact Access Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use domestic_connect_app::domain::identities::ProfileId;

use crate::{contact_access::errors::into_status_error, extensions::*, state::State};

/// Contact Access Check Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccessCheckResponse {
    pub target_profile_id: String,

    /// Whether the caller has unlocked this contact
    pub has_access: bool,
}

/// Check Contact Access Handler
#[endpoint(
    tags("contact-access"),
    summary = "Check Contact Access",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    target: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AccessCheckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let target = target.into_inner();

    let has_access = state
        .app
        .contact_access
        .has_access(user, ProfileId::new(target.clone()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(AccessCheckResponse {
        target_profile_id: target,
        has_access,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use domestic_connect_app::domain::{
        contact_access::MockContactAccessService, identities::UserId,
    };

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(contact_access: MockContactAccessService) -> Service {
        Mocks {
            contact_access,
            ..Mocks::default()
        }
        .into_user_service(Router::with_path("contact-access/{target}").get(handler))
    }

    #[tokio::test]
    async fn test_check_reports_access() -> TestResult {
        let mut contact_access = MockContactAccessService::new();

        contact_access
            .expect_has_access()
            .once()
            .withf(|user, target| {
                *user == UserId::from("u1") && *target == ProfileId::from("target_42")
            })
            .return_once(|_, _| Ok(true));

        let mut res = TestClient::get("http://example.com/contact-access/target_42")
            .send(&make_service(contact_access))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: AccessCheckResponse = res.take_json().await?;

        assert_eq!(body.target_profile_id, "target_42");
        assert!(body.has_access);

        Ok(())
    }

    #[tokio::test]
    async fn test_check_reports_no_access() -> TestResult {
        let mut contact_access = MockContactAccessService::new();

        contact_access
            .expect_has_access()
            .once()
            .return_once(|_, _| Ok(false));

        let mut res = TestClient::get("http://example.com/contact-access/target_7")
            .send(&make_service(contact_access))
            .await;

        let body: AccessCheckResponse = res.take_json().await?;

        assert!(!body.has_access);

        Ok(())
    }
}
