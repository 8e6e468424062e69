//! The rental ledger.
//!
//! `RentalLedger` owns the catalog, the customer roster and the open rentals,
//! and is the only place where a car moves between the available and rented
//! states. Invariants maintained by every operation:
//!
//! - A car is available iff no open rental references its id
//! - Car ids and customer ids are unique
//! - Customer ids are assigned sequentially ("CID1", "CID2", ...)
//!
//! Each operation validates everything up front and only then mutates, so a
//! failed call leaves the ledger exactly as it was.

use tracing::{debug, error};

use crate::car::Car;
use crate::customer::{customer_id, Customer};
use crate::error::{RentalError, Result};
use crate::receipt::{RentalQuote, RentalReceipt, ReturnReceipt};
use crate::rental::Rental;

/// In-memory ledger of cars, customers and open rentals.
#[derive(Debug, Default)]
pub struct RentalLedger {
    cars: Vec<Car>,
    customers: Vec<Customer>,
    rentals: Vec<Rental>,
}

impl RentalLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger seeded with `cars`, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first car `add_car` rejects.
    pub fn with_catalog(cars: impl IntoIterator<Item = Car>) -> Result<Self> {
        let mut ledger = Self::new();
        for car in cars {
            ledger.add_car(car)?;
        }
        Ok(ledger)
    }

    // --- Inventory ---

    /// Append a car to the catalog.
    ///
    /// # Errors
    ///
    /// - `RentalError::DuplicateIdentity` if the car id is already cataloged
    /// - `RentalError::InvalidRate` if the daily rate is not positive
    /// - `RentalError::CarUnavailable` if the car is marked rented; only
    ///   `open_rental` may take a car off the lot
    pub fn add_car(&mut self, car: Car) -> Result<()> {
        if self.car(car.id()).is_some() {
            return Err(RentalError::DuplicateIdentity(car.id().to_string()));
        }
        if !car.is_available() {
            return Err(RentalError::CarUnavailable(car.id().to_string()));
        }
        if car.base_price_per_day() <= rust_decimal::Decimal::ZERO {
            return Err(RentalError::InvalidRate {
                car_id: car.id().to_string(),
                rate: car.base_price_per_day(),
            });
        }
        debug!(car_id = car.id(), car = %car.display_name(), "added car to catalog");
        self.cars.push(car);
        Ok(())
    }

    /// Append a customer to the roster.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::DuplicateIdentity` if the customer id is taken.
    pub fn add_customer(&mut self, customer: Customer) -> Result<()> {
        if self.customer(customer.id()).is_some() {
            return Err(RentalError::DuplicateIdentity(customer.id().to_string()));
        }
        debug!(customer_id = customer.id(), "added customer");
        self.customers.push(customer);
        Ok(())
    }

    // --- Queries ---

    /// Cars that can be rented right now, in catalog order.
    ///
    /// The iterator is computed fresh on every call.
    pub fn list_available_cars(&self) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter().filter(|car| car.is_available())
    }

    /// The full catalog, in insertion order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// All customers, in the order they were created.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All open rentals.
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn car(&self, car_id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id() == car_id)
    }

    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.id() == customer_id)
    }

    /// The open rental for `car_id`, if the car is currently rented out.
    pub fn rental_for(&self, car_id: &str) -> Option<&Rental> {
        self.rentals.iter().find(|rental| rental.car_id == car_id)
    }

    // --- Workflow ---

    /// Price a rental without opening it.
    ///
    /// Performs the same checks as `open_rental` and never mutates the ledger.
    pub fn quote_rental(&self, car_id: &str, days: u32) -> Result<RentalQuote> {
        let car = &self.cars[self.rentable_car_index(car_id)?];
        let total_price = car.calculate_price(days)?;
        Ok(RentalQuote {
            car_id: car.id().to_string(),
            brand: car.brand().to_string(),
            model: car.model().to_string(),
            days,
            price_per_day: car.base_price_per_day(),
            total_price,
        })
    }

    /// Rent `car_id` to a new customer named `customer_name` for `days` days.
    ///
    /// # Errors
    ///
    /// - `RentalError::CarNotFound` if the car id is not cataloged
    /// - `RentalError::CarUnavailable` if the car is already rented
    /// - `RentalError::InvalidDuration` if `days` is zero
    ///
    /// On error no customer is created and no rental is recorded.
    pub fn open_rental(
        &mut self,
        car_id: &str,
        customer_name: &str,
        days: u32,
    ) -> Result<RentalReceipt> {
        let car_index = self.rentable_car_index(car_id)?;
        let total_price = self.cars[car_index].calculate_price(days)?;

        let customer = Customer::new(self.next_customer_id(), customer_name);
        let rental = Rental::new(car_id, customer.id(), days, total_price);

        let car = &mut self.cars[car_index];
        car.rent();

        let receipt = RentalReceipt {
            customer_id: customer.id().to_string(),
            customer_name: customer.name().to_string(),
            car_id: car.id().to_string(),
            brand: car.brand().to_string(),
            model: car.model().to_string(),
            days,
            price_per_day: car.base_price_per_day(),
            total_price,
            opened_at: rental.opened_at,
        };

        debug!(
            car_id,
            customer_id = customer.id(),
            days,
            total_price = %total_price,
            "opened rental"
        );
        self.customers.push(customer);
        self.rentals.push(rental);
        Ok(receipt)
    }

    /// Return `car_id` and close its rental.
    ///
    /// # Errors
    ///
    /// - `RentalError::CarNotFound` if the car id is unknown or not rented
    /// - `RentalError::RentalRecordMissing` if the car is rented but has no
    ///   rental record; the car is left rented
    pub fn close_rental(&mut self, car_id: &str) -> Result<ReturnReceipt> {
        let car_index = self
            .cars
            .iter()
            .position(|car| car.id() == car_id && !car.is_available())
            .ok_or_else(|| RentalError::CarNotFound(car_id.to_string()))?;

        let Some(rental_index) = self
            .rentals
            .iter()
            .position(|rental| rental.car_id == car_id)
        else {
            error!(car_id, "car is rented but has no open rental record");
            return Err(RentalError::RentalRecordMissing(car_id.to_string()));
        };

        let rental = &self.rentals[rental_index];
        let Some(customer) = self.customer(&rental.customer_id) else {
            error!(
                car_id,
                customer_id = %rental.customer_id,
                "open rental references an unknown customer"
            );
            return Err(RentalError::RentalRecordMissing(car_id.to_string()));
        };

        let car = &self.cars[car_index];
        let receipt = ReturnReceipt {
            customer_id: customer.id().to_string(),
            customer_name: customer.name().to_string(),
            car_id: car.id().to_string(),
            brand: car.brand().to_string(),
            model: car.model().to_string(),
            days: rental.days,
            total_price: rental.total_price,
        };

        self.rentals.remove(rental_index);
        self.cars[car_index].return_car();
        debug!(car_id, customer_id = %receipt.customer_id, "closed rental");
        Ok(receipt)
    }

    /// Index of `car_id` in the catalog, provided it can be rented.
    fn rentable_car_index(&self, car_id: &str) -> Result<usize> {
        let index = self
            .cars
            .iter()
            .position(|car| car.id() == car_id)
            .ok_or_else(|| RentalError::CarNotFound(car_id.to_string()))?;
        if !self.cars[index].is_available() {
            return Err(RentalError::CarUnavailable(car_id.to_string()));
        }
        Ok(index)
    }

    /// Next sequential customer id, skipping ids already taken by seeded customers.
    fn next_customer_id(&self) -> String {
        let mut sequence = self.customers.len() + 1;
        loop {
            let candidate = customer_id(sequence);
            if self.customer(&candidate).is_none() {
                return candidate;
            }
            sequence += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use rust_decimal::Decimal;

    fn seeded() -> RentalLedger {
        RentalLedger::with_catalog(default_catalog()).unwrap()
    }

    fn available_ids(ledger: &RentalLedger) -> Vec<String> {
        ledger
            .list_available_cars()
            .map(|car| car.id().to_string())
            .collect()
    }

    #[test]
    fn test_add_car_rejects_duplicate_id() {
        let mut ledger = seeded();
        let result = ledger.add_car(Car::new("C001", "Ford", "Focus", Decimal::from(90)));
        assert_eq!(
            result,
            Err(RentalError::DuplicateIdentity("C001".to_string()))
        );
        assert_eq!(ledger.cars().len(), 3);
    }

    #[test]
    fn test_add_car_rejects_non_positive_rate() {
        let mut ledger = RentalLedger::new();
        let result = ledger.add_car(Car::new("C100", "Ford", "Focus", Decimal::ZERO));
        assert!(matches!(result, Err(RentalError::InvalidRate { .. })));
        let result = ledger.add_car(Car::new("C101", "Ford", "Focus", Decimal::from(-5)));
        assert!(matches!(result, Err(RentalError::InvalidRate { .. })));
        assert!(ledger.cars().is_empty());
    }

    #[test]
    fn test_add_car_rejects_rented_car() {
        let mut lot = seeded();
        lot.open_rental("C001", "Alice", 1).unwrap();
        let rented = lot.car("C001").unwrap().clone();

        let mut ledger = RentalLedger::new();
        assert_eq!(
            ledger.add_car(rented),
            Err(RentalError::CarUnavailable("C001".to_string()))
        );
        assert!(ledger.cars().is_empty());
        assert_eq!(
            ledger.close_rental("C001"),
            Err(RentalError::CarNotFound("C001".to_string()))
        );
    }

    #[test]
    fn test_add_customer_rejects_duplicate_id() {
        let mut ledger = RentalLedger::new();
        ledger.add_customer(Customer::new("CID1", "Alice")).unwrap();
        let result = ledger.add_customer(Customer::new("CID1", "Bob"));
        assert_eq!(result, Err(RentalError::DuplicateIdentity("CID1".into())));
    }

    #[test]
    fn test_open_rental_receipt() {
        let mut ledger = seeded();
        let receipt = ledger.open_rental("C001", "Alice", 3).unwrap();

        assert_eq!(receipt.customer_id, "CID1");
        assert_eq!(receipt.customer_name, "Alice");
        assert_eq!(receipt.car_name(), "Toyota Camry");
        assert_eq!(receipt.days, 3);
        assert_eq!(receipt.total_price, Decimal::from(300));

        assert!(!ledger.car("C001").unwrap().is_available());
        assert_eq!(ledger.rentals().len(), 1);
        assert_eq!(ledger.rental_for("C001").unwrap().customer_id, "CID1");
    }

    #[test]
    fn test_open_rental_checks_car_before_duration() {
        let mut ledger = seeded();
        assert_eq!(
            ledger.open_rental("ZZZ", "Bob", 0),
            Err(RentalError::CarNotFound("ZZZ".into()))
        );
    }

    #[test]
    fn test_failed_open_does_not_burn_customer_id() {
        let mut ledger = seeded();
        assert!(ledger.open_rental("C002", "Carl", 0).is_err());
        assert!(ledger.open_rental("ZZZ", "Carl", 2).is_err());
        assert!(ledger.customers().is_empty());

        let receipt = ledger.open_rental("C002", "Carl", 2).unwrap();
        assert_eq!(receipt.customer_id, "CID1");
    }

    #[test]
    fn test_next_customer_id_skips_seeded_ids() {
        let mut ledger = seeded();
        ledger.add_customer(Customer::new("CID2", "Seed")).unwrap();

        let receipt = ledger.open_rental("C001", "Alice", 1).unwrap();
        assert_eq!(receipt.customer_id, "CID3");
    }

    #[test]
    fn test_quote_does_not_mutate() {
        let ledger = seeded();
        let quote = ledger.quote_rental("C003", 2).unwrap();
        assert_eq!(quote.total_price, Decimal::from(280));
        assert_eq!(quote.car_name(), "Mahindra Thar");
        assert!(ledger.customers().is_empty());
        assert_eq!(available_ids(&ledger), vec!["C001", "C002", "C003"]);
    }

    #[test]
    fn test_quote_rejects_rented_car() {
        let mut ledger = seeded();
        ledger.open_rental("C003", "Dana", 1).unwrap();
        assert_eq!(
            ledger.quote_rental("C003", 1),
            Err(RentalError::CarUnavailable("C003".into()))
        );
    }

    #[test]
    fn test_close_rental_names_customer() {
        let mut ledger = seeded();
        ledger.open_rental("C002", "Erin", 4).unwrap();

        let receipt = ledger.close_rental("C002").unwrap();
        assert_eq!(receipt.customer_name, "Erin");
        assert_eq!(receipt.customer_id, "CID1");
        assert_eq!(receipt.total_price, Decimal::from(520));
        assert!(ledger.car("C002").unwrap().is_available());
        assert!(ledger.rentals().is_empty());
        // The customer stays on the roster.
        assert_eq!(ledger.customers().len(), 1);
    }

    #[test]
    fn test_close_available_car_is_not_found() {
        let mut ledger = seeded();
        assert_eq!(
            ledger.close_rental("C001"),
            Err(RentalError::CarNotFound("C001".into()))
        );
    }

    #[test]
    fn test_close_with_missing_record_keeps_car_rented() {
        let mut ledger = seeded();
        ledger.open_rental("C001", "Fay", 2).unwrap();
        ledger.rentals.clear();

        let err = ledger.close_rental("C001").unwrap_err();
        assert_eq!(err, RentalError::RentalRecordMissing("C001".into()));
        assert!(err.is_ledger_fault());
        assert!(!ledger.car("C001").unwrap().is_available());
    }

    #[test]
    fn test_close_with_unknown_customer_is_fault() {
        let mut ledger = seeded();
        ledger.open_rental("C001", "Gus", 2).unwrap();
        ledger.customers.clear();

        let err = ledger.close_rental("C001").unwrap_err();
        assert!(err.is_ledger_fault());
        assert_eq!(ledger.rentals().len(), 1);
        assert!(!ledger.car("C001").unwrap().is_available());
    }
}
