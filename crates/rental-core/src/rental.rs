//! Open rental records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// An open booking linking a car to a customer.
///
/// The car and customer are referenced by id; the ledger owns both records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rental {
    /// Rented car
    pub car_id: String,

    /// Customer holding the car
    pub customer_id: String,

    /// Rental duration in days (at least 1)
    pub days: u32,

    /// Price quoted when the rental was opened
    pub total_price: Decimal,

    /// When the rental was opened
    pub opened_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(
        car_id: impl Into<String>,
        customer_id: impl Into<String>,
        days: u32,
        total_price: Decimal,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            customer_id: customer_id.into(),
            days,
            total_price,
            opened_at: Utc::now(),
        }
    }
}
