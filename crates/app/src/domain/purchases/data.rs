//! Purchase Data

use rust_decimal::Decimal;

use crate::{
    database::max_money,
    domain::{identities::UserId, packages::records::PackageId, purchases::PurchasesServiceError},
};

/// Longest payment reference the ledger stores.
pub const MAX_PAYMENT_REFERENCE_LEN: usize = 100;

/// New Purchase Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchase {
    pub user_id: UserId,
    pub package_id: PackageId,
    pub amount: Decimal,
    pub payment_reference: Option<String>,
}

impl NewPurchase {
    /// # Errors
    ///
    /// Returns [`PurchasesServiceError::InvalidInput`] when the user or package id
    /// is blank, the amount is not positive or exceeds [`max_money`], or the
    /// reference is too long.
    pub fn validate(&self) -> Result<(), PurchasesServiceError> {
        if !self.user_id.is_valid() || !self.package_id.is_valid() {
            return Err(PurchasesServiceError::InvalidInput);
        }

        if self.amount <= Decimal::ZERO || self.amount.round_dp(2) > max_money() {
            return Err(PurchasesServiceError::InvalidInput);
        }

        if self
            .payment_reference
            .as_ref()
            .is_some_and(|reference| reference.chars().count() > MAX_PAYMENT_REFERENCE_LEN)
        {
            return Err(PurchasesServiceError::InvalidInput);
        }

        Ok(())
    }
}
