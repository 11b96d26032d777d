//! Contact Access Grants

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ContactAccessServiceError;
pub use service::*;
