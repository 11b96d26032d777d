//! Depot helper extensions.

use std::any::Any;

use domestic_connect_app::domain::identities::UserId;
use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated caller for downstream handlers.
    fn insert_user_id(&mut self, user: UserId);

    fn user_id_or_401(&self) -> Result<UserId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_id(&mut self, user: UserId) {
        self.inject(user);
    }

    fn user_id_or_401(&self) -> Result<UserId, StatusError> {
        self.obtain::<UserId>()
            .cloned()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}
