//! Purchase Handlers

pub(crate) mod create;
pub(crate) mod index;

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use domestic_connect_app::domain::{
        identities::UserId,
        packages::records::PackageId,
        purchases::records::{PurchaseId, PurchaseRecord, PurchaseStatus},
    };

    pub(crate) fn make_purchase(id: &str, package: &str, amount: Decimal) -> PurchaseRecord {
        PurchaseRecord {
            id: PurchaseId::from(id),
            user_id: UserId::from("u1"),
            package_id: PackageId::from(package),
            package_name: format!("Package {package}"),
            amount,
            status: PurchaseStatus::Completed,
            payment_reference: Some("MPESA123".to_string()),
            purchase_date: Timestamp::UNIX_EPOCH,
        }
    }
}
