//! Identities owned by collaborators outside this crate.
//!
//! Users come from the identity provider and worker profiles from the profile
//! service. Both are referenced opaquely; nothing here reads their rows.

use crate::ids::TypedId;

/// Marketplace user marker.
#[derive(Debug)]
pub struct User;

/// User identifier as supplied by the identity provider.
pub type UserId = TypedId<User>;

/// Worker profile marker.
#[derive(Debug)]
pub struct WorkerProfile;

/// Identifier of the worker profile whose contact can be unlocked.
pub type ProfileId = TypedId<WorkerProfile>;
