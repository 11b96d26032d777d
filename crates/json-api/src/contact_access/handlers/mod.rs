//! Contact Access Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;

    use domestic_connect_app::domain::{
        contact_access::records::{ContactAccessId, ContactAccessRecord},
        identities::{ProfileId, UserId},
    };

    pub(crate) fn make_grant(id: &str, target: &str) -> ContactAccessRecord {
        ContactAccessRecord {
            id: ContactAccessId::from(id),
            user_id: UserId::from("u1"),
            target_profile_id: ProfileId::from(target),
            accessed_at: Timestamp::UNIX_EPOCH,
        }
    }
}
