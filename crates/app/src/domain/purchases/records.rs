//! Purchase Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    domain::{identities::UserId, packages::records::PackageId},
    ids::TypedId,
};

/// Purchase identifier
pub type PurchaseId = TypedId<PurchaseRecord>;

/// Settlement state of a purchase.
///
/// Purchases are written once; the ledger itself only ever writes `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    Completed,
    Pending,
    Failed,
}

impl PurchaseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown purchase status {0:?}")]
pub struct UnknownPurchaseStatus(pub String);

impl FromStr for PurchaseStatus {
    type Err = UnknownPurchaseStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            other => Err(UnknownPurchaseStatus(other.to_string())),
        }
    }
}

/// Purchase Record
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub id: PurchaseId,
    pub user_id: UserId,
    pub package_id: PackageId,

    /// Name of the purchased package, joined in for purchase history views.
    pub package_name: String,

    /// Amount actually paid; independent of the package's catalog price.
    pub amount: Decimal,
    pub status: PurchaseStatus,

    /// Opaque reference issued by the payment processor.
    pub payment_reference: Option<String>,
    pub purchase_date: Timestamp,
}

/// Ledger-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub total_purchases: u64,
    pub total_revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            PurchaseStatus::Completed,
            PurchaseStatus::Pending,
            PurchaseStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<PurchaseStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("refunded".parse::<PurchaseStatus>().is_err());
    }
}
