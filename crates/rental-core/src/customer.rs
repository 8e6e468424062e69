//! Customer records.

use serde::Serialize;

/// Prefix for ledger-assigned customer ids ("CID1", "CID2", ...).
pub const CUSTOMER_ID_PREFIX: &str = "CID";

/// A customer who has rented at least one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: String,
    name: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Build the customer id for the `sequence`-th customer (1-based).
pub fn customer_id(sequence: usize) -> String {
    format!("{}{}", CUSTOMER_ID_PREFIX, sequence)
}
