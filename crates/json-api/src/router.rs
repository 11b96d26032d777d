//! App Router

use salvo::Router;

use crate::{auth, contact_access, healthcheck, observability, packages, purchases};

/// Every application route, before API docs are attached.
pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("packages")
                .get(packages::index::handler)
                .push(Router::with_path("{package}").get(packages::get::handler)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("purchases")
                        .get(purchases::index::handler)
                        .post(purchases::create::handler),
                )
                .push(
                    Router::with_path("contact-access")
                        .get(contact_access::index::handler)
                        .post(contact_access::create::handler)
                        .push(Router::with_path("{target}").get(contact_access::get::handler)),
                ),
        )
}
