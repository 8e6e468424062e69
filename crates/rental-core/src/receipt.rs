//! Read-only summaries returned by ledger operations.
//!
//! Receipts are plain values: they copy what the caller needs to display and
//! never borrow from the ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Price preview for a rental that has not been opened yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalQuote {
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub days: u32,
    pub price_per_day: Decimal,
    pub total_price: Decimal,
}

/// Summary of a rental that was just opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalReceipt {
    pub customer_id: String,
    pub customer_name: String,
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub days: u32,
    pub price_per_day: Decimal,
    pub total_price: Decimal,
    pub opened_at: DateTime<Utc>,
}

/// Summary of a rental that was just closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnReceipt {
    pub customer_id: String,
    pub customer_name: String,
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub days: u32,
    pub total_price: Decimal,
}

impl RentalReceipt {
    /// "Brand Model" of the rented car.
    pub fn car_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

impl ReturnReceipt {
    /// "Brand Model" of the returned car.
    pub fn car_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

impl RentalQuote {
    /// "Brand Model" of the quoted car.
    pub fn car_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
