//! Typed identifiers

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use uuid::Uuid;

/// Longest identifier the storage columns accept.
pub const MAX_ID_LEN: usize = 50;

/// Opaque string identifier tagged with the record type it refers to.
///
/// Identifiers created elsewhere (users, worker profiles, seeded packages)
/// keep their original text; identifiers minted here are `UUIDv7` strings.
pub struct TypedId<T>(String, PhantomData<T>);

impl<T> TypedId<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into(), PhantomData)
    }

    /// Mint a fresh, time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Non-blank and short enough to be stored.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty() && self.0.chars().count() <= MAX_ID_LEN
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<String> for TypedId<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> From<&str> for TypedId<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<TypedId<T>> for String {
    fn from(value: TypedId<T>) -> Self {
        value.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker;

    type MarkerId = TypedId<Marker>;

    #[test]
    fn generated_ids_are_unique_and_valid() {
        let a = MarkerId::generate();
        let b = MarkerId::generate();

        assert_ne!(a, b, "generated ids should differ");
        assert!(a.is_valid(), "generated id should be storable");
    }

    #[test]
    fn blank_ids_are_invalid() {
        assert!(!MarkerId::new("").is_valid());
        assert!(!MarkerId::new("   ").is_valid());
    }

    #[test]
    fn overlong_ids_are_invalid() {
        assert!(!MarkerId::new("x".repeat(MAX_ID_LEN + 1)).is_valid());
        assert!(MarkerId::new("x".repeat(MAX_ID_LEN)).is_valid());
    }

    #[test]
    fn length_is_counted_in_characters() {
        assert!(MarkerId::new("ñ".repeat(30)).is_valid(), "30 characters fit");
        assert!(MarkerId::new("ñ".repeat(MAX_ID_LEN)).is_valid(), "limit is inclusive");
        assert!(!MarkerId::new("ñ".repeat(MAX_ID_LEN + 1)).is_valid(), "one past the limit");
    }

    #[test]
    fn external_ids_keep_their_text() {
        let id = MarkerId::from("pkg_basic");

        assert_eq!(id.as_str(), "pkg_basic");
        assert_eq!(id.to_string(), "pkg_basic");
        assert_eq!(String::from(id), "pkg_basic");
    }
}
