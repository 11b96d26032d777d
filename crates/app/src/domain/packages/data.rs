//! Package Data

use rust_decimal::Decimal;

use crate::{
    database::max_money,
    domain::packages::{PackagesServiceError, records::PackageId},
};

/// Longest package name the catalog stores.
pub const MAX_PACKAGE_NAME_LEN: usize = 100;

/// New Package Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPackage {
    pub id: PackageId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub contacts_included: u32,
}

impl NewPackage {
    /// Reject packages the catalog could never sell.
    ///
    /// # Errors
    ///
    /// Returns [`PackagesServiceError::InvalidInput`] for a blank id, a blank or
    /// overlong name, a price outside `(0, max_money]`, or a contact quota
    /// outside `1..=i32::MAX`.
    pub fn validate(&self) -> Result<(), PackagesServiceError> {
        if !self.id.is_valid()
            || self.name.trim().is_empty()
            || self.name.chars().count() > MAX_PACKAGE_NAME_LEN
        {
            return Err(PackagesServiceError::InvalidInput);
        }

        if self.price <= Decimal::ZERO
            || self.price.round_dp(2) > max_money()
            || self.contacts_included == 0
            || i32::try_from(self.contacts_included).is_err()
        {
            return Err(PackagesServiceError::InvalidInput);
        }

        Ok(())
    }
}

/// The catalog every fresh installation starts with.
#[must_use]
pub fn default_packages() -> Vec<NewPackage> {
    vec![
        NewPackage {
            id: PackageId::from("pkg_basic"),
            name: "Basic Package".to_string(),
            description: Some("Access to 5 housegirl contacts".to_string()),
            price: Decimal::new(500_00, 2),
            contacts_included: 5,
        },
        NewPackage {
            id: PackageId::from("pkg_premium"),
            name: "Premium Package".to_string(),
            description: Some("Access to 20 housegirl contacts".to_string()),
            price: Decimal::new(1500_00, 2),
            contacts_included: 20,
        },
        NewPackage {
            id: PackageId::from("pkg_enterprise"),
            name: "Enterprise Package".to_string(),
            description: Some("Unlimited access to all housegirl contacts".to_string()),
            price: Decimal::new(3000_00, 2),
            contacts_included: 999,
        },
    ]
}
