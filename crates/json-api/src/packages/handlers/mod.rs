//! Package Handlers

pub(crate) mod get;
pub(crate) mod index;

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use domestic_connect_app::domain::packages::records::PackageRecord;

/// Package Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackageResponse {
    /// Package identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Marketing copy
    pub description: Option<String>,

    /// Price as a decimal string, e.g. `"500.00"`
    pub price: String,

    /// Number of contact unlocks the package buys
    pub contacts_included: u32,

    /// Whether the package is on sale
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: String,
}

impl From<PackageRecord> for PackageResponse {
    fn from(package: PackageRecord) -> Self {
        Self {
            id: package.id.into_string(),
            name: package.name,
            description: package.description,
            price: format_money(package.price),
            contacts_included: package.contacts_included,
            is_active: package.is_active,
            created_at: package.created_at.to_string(),
        }
    }
}

/// Render an amount with exactly two decimal places.
pub(crate) fn format_money(amount: Decimal) -> String {
    let mut amount = amount.round_dp(2);

    amount.rescale(2);

    amount.to_string()
}
