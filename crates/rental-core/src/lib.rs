//! # Rental Core
//!
//! Core library for Rental - an in-memory car rental ledger.
//!
//! This crate provides the domain model and the rental/return workflow,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **car**: Rentable cars, daily rates and price calculation
//! - **customer**: Customer records minted by the ledger
//! - **rental**: Open rental records keyed by car and customer id
//! - **ledger**: The `RentalLedger` owning all collections
//! - **receipt**: Read-only summaries returned by ledger operations
//! - **catalog**: The default seed catalog

pub mod car;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod ledger;
pub mod receipt;
pub mod rental;

pub use car::Car;
pub use catalog::default_catalog;
pub use customer::Customer;
pub use error::{RentalError, Result};
pub use ledger::RentalLedger;
pub use receipt::{RentalQuote, RentalReceipt, ReturnReceipt};
pub use rental::Rental;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
