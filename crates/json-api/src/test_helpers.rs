//! Test helpers.

use std::sync::Arc;

use domestic_connect_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        contact_access::MockContactAccessService, identities::UserId,
        packages::MockPackagesService, purchases::MockPurchasesService,
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER: &str = "u1";

/// Service mocks backing a test [`State`].
///
/// Mocks left at their default have no expectations, so any call fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub packages: MockPackagesService,
    pub purchases: MockPurchasesService,
    pub contact_access: MockContactAccessService,
    pub auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            packages: Arc::new(self.packages),
            purchases: Arc::new(self.purchases),
            contact_access: Arc::new(self.contact_access),
            auth: Arc::new(self.auth),
        })
    }

    /// Serve `route` without authentication.
    pub(crate) fn into_public_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Serve `route` as if [`TEST_USER`] had authenticated.
    pub(crate) fn into_user_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }
}

#[salvo::handler]
async fn inject_user(req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    depot.insert_user_id(UserId::from(TEST_USER));
    ctrl.call_next(req, depot, res).await;
}
