//! Domestic Connect Domain Concerns

pub mod contact_access;
pub mod identities;
pub mod packages;
pub mod purchases;
