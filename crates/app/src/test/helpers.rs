//! Test Helpers

use std::{
    borrow::Cow,
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

use rust_decimal::Decimal;
use sqlx::error::{DatabaseError, ErrorKind};

use crate::domain::packages::{data::NewPackage, records::PackageId};

/// A package with a whole-unit price and a name derived from its id.
pub(crate) fn new_package(id: &str, price: i64, contacts_included: u32) -> NewPackage {
    NewPackage {
        id: PackageId::from(id),
        name: format!("Package {id}"),
        description: None,
        price: Decimal::new(price, 0),
        contacts_included,
    }
}

/// A driver error carrying only a SQLSTATE code.
pub(crate) fn database_error(code: &'static str) -> sqlx::Error {
    sqlx::Error::Database(Box::new(CodedDatabaseError { code }))
}

#[derive(Debug)]
struct CodedDatabaseError {
    code: &'static str,
}

impl Display for CodedDatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "database error {}", self.code)
    }
}

impl StdError for CodedDatabaseError {}

impl DatabaseError for CodedDatabaseError {
    fn message(&self) -> &str {
        "database error"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}
