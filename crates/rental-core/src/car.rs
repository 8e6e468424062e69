//! Rentable cars and daily pricing.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{RentalError, Result};

/// A car in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    /// Unique catalog identifier (e.g., "C001")
    id: String,

    /// Manufacturer
    brand: String,

    /// Model name
    model: String,

    /// Price charged per rental day
    base_price_per_day: Decimal,

    /// False while an open rental references this car
    available: bool,
}

impl Car {
    /// Create a new car. Cars start out available.
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price_per_day: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            base_price_per_day,
            available: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_price_per_day(&self) -> Decimal {
        self.base_price_per_day
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// "Brand Model", as shown in listings and receipts.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Total price for renting this car for `rental_days` days.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidDuration` when `rental_days` is zero.
    pub fn calculate_price(&self, rental_days: u32) -> Result<Decimal> {
        if rental_days == 0 {
            return Err(RentalError::InvalidDuration(rental_days));
        }
        Ok(self.base_price_per_day * Decimal::from(rental_days))
    }

    pub(crate) fn rent(&mut self) {
        self.available = false;
    }

    pub(crate) fn return_car(&mut self) {
        self.available = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> Car {
        Car::new("C001", "Toyota", "Camry", Decimal::from(100))
    }

    #[test]
    fn test_new_car_is_available() {
        let car = camry();
        assert!(car.is_available());
        assert_eq!(car.id(), "C001");
        assert_eq!(car.display_name(), "Toyota Camry");
    }

    #[test]
    fn test_calculate_price() {
        let car = camry();
        assert_eq!(car.calculate_price(1).unwrap(), Decimal::from(100));
        assert_eq!(car.calculate_price(3).unwrap(), Decimal::from(300));
    }

    #[test]
    fn test_calculate_price_keeps_cents() {
        let car = Car::new("C010", "Fiat", "Panda", Decimal::new(4999, 2));
        assert_eq!(car.calculate_price(3).unwrap(), Decimal::new(14997, 2));
    }

    #[test]
    fn test_calculate_price_rejects_zero_days() {
        let car = camry();
        assert_eq!(
            car.calculate_price(0),
            Err(RentalError::InvalidDuration(0))
        );
    }

    #[test]
    fn test_rent_and_return_toggle_availability() {
        let mut car = camry();
        car.rent();
        assert!(!car.is_available());
        car.return_car();
        assert!(car.is_available());
        // Returning an available car leaves it available.
        car.return_car();
        assert!(car.is_available());
    }
}
