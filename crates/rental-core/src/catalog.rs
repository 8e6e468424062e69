//! Default seed catalog.

use rust_decimal::Decimal;

use crate::car::Car;

/// The three cars every fresh ledger starts with when no catalog is configured.
pub fn default_catalog() -> Vec<Car> {
    vec![
        Car::new("C001", "Toyota", "Camry", Decimal::from(100)),
        Car::new("C002", "Honda", "Accord", Decimal::from(130)),
        Car::new("C003", "Mahindra", "Thar", Decimal::from(140)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let cars = default_catalog();
        let ids: Vec<&str> = cars.iter().map(Car::id).collect();
        assert_eq!(ids, vec!["C001", "C002", "C003"]);
        assert_eq!(cars[1].base_price_per_day(), Decimal::from(130));
        assert!(cars.iter().all(Car::is_available));
    }
}
