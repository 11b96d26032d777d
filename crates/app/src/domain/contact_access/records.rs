//! Contact Access Records

use jiff::Timestamp;

use crate::{
    domain::identities::{ProfileId, UserId},
    ids::TypedId,
};

/// Contact access grant identifier
pub type ContactAccessId = TypedId<ContactAccessRecord>;

/// Permanent proof that a user has unlocked a worker profile's contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactAccessRecord {
    pub id: ContactAccessId,
    pub user_id: UserId,
    pub target_profile_id: ProfileId,
    pub accessed_at: Timestamp,
}

/// Outcome of an unlock attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactUnlock {
    /// `true` only when this call created the grant.
    pub granted: bool,
    pub grant: ContactAccessRecord,
}
