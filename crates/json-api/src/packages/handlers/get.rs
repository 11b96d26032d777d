//! Get Package Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use domestic_connect_app::domain::packages::records::PackageId;

use crate::{
    extensions::*,
    packages::{errors::into_status_error, handlers::PackageResponse},
    state::State,
};

/// Get Package Handler
///
/// Returns a package whether or not it is still on sale.
#[endpoint(
    tags("packages"),
    summary = "Get Package",
    responses(
        (status_code = StatusCode::OK, description = "Package found"),
        (status_code = StatusCode::NOT_FOUND, description = "Package not found"),
    ),
)]
pub(crate) async fn handler(
    package: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PackageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let package = state
        .app
        .packages
        .get_package(PackageId::new(package.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(package.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use domestic_connect_app::domain::packages::{MockPackagesService, PackagesServiceError};

    use crate::{packages::handlers::tests::make_package, test_helpers::Mocks};

    use super::*;

    fn make_service(packages: MockPackagesService) -> Service {
        Mocks {
            packages,
            ..Mocks::default()
        }
        .into_public_service(Router::with_path("packages/{package}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_package() -> TestResult {
        let mut packages = MockPackagesService::new();

        packages
            .expect_get_package()
            .once()
            .withf(|id| *id == PackageId::from("pkg_premium"))
            .return_once(|_| Ok(make_package("pkg_premium", 1500, 20)));

        let mut res = TestClient::get("http://example.com/packages/pkg_premium")
            .send(&make_service(packages))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PackageResponse = res.take_json().await?;

        assert_eq!(body.id, "pkg_premium");
        assert_eq!(body.price, "1500.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_package_returns_404() -> TestResult {
        let mut packages = MockPackagesService::new();

        packages
            .expect_get_package()
            .once()
            .return_once(|_| Err(PackagesServiceError::NotFound));

        let res = TestClient::get("http://example.com/packages/pkg_none")
            .send(&make_service(packages))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
