//! Package Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Package identifier
pub type PackageId = TypedId<PackageRecord>;

/// Package Record
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    /// Catalog identifier, e.g. `pkg_basic`.
    pub id: PackageId,

    /// Display name.
    pub name: String,

    /// Optional marketing copy.
    pub description: Option<String>,

    /// Catalog price in the major currency unit.
    pub price: Decimal,

    /// Number of contact unlocks the package nominally buys.
    pub contacts_included: u32,

    /// Inactive packages are hidden from the catalog but remain referenced by purchases.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: Timestamp,
}
