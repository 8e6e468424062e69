//! Error types for rental ledger operations.
//!
//! Every ledger operation returns an explicit `Result`; nothing in this crate
//! panics on bad input. The CLI layer maps these to user-friendly messages
//! and exit codes.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for rental operations.
pub type Result<T> = std::result::Result<T, RentalError>;

/// Core error type for rental operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    /// Car id is not in the catalog, or (on return) the car is not rented
    #[error("Car not found: {0}")]
    CarNotFound(String),

    /// Car exists but is already rented
    #[error("Car {0} is not available for rent")]
    CarUnavailable(String),

    /// Rental duration below one day
    #[error("Invalid rental duration: {0} day(s), must be at least 1")]
    InvalidDuration(u32),

    /// Car is marked rented but no open rental references it
    #[error("Rental record missing for rented car {0}")]
    RentalRecordMissing(String),

    /// Identity already present in the ledger
    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// Daily rate is zero or negative
    #[error("Invalid daily rate for car {car_id}: {rate}")]
    InvalidRate { car_id: String, rate: Decimal },
}

impl RentalError {
    /// True when the error signals a bug in the ledger rather than bad input.
    pub fn is_ledger_fault(&self) -> bool {
        matches!(self, RentalError::RentalRecordMissing(_))
    }
}
