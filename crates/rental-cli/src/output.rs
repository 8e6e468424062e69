//! Output formatting helpers for cars and receipts.

use rental_core::{Car, RentalQuote, RentalReceipt, ReturnReceipt};

use crate::ui::{format_datetime, format_money, single_line, Column};

/// Columns for catalog listings.
pub fn car_columns(with_status: bool) -> Vec<Column> {
    let mut columns = vec![
        Column::new("ID"),
        Column::new("CAR"),
        Column::new("PER DAY"),
    ];
    if with_status {
        columns.push(Column::new("STATUS"));
    }
    columns
}

/// One table row per car.
pub fn car_rows<'a>(
    cars: impl IntoIterator<Item = &'a Car>,
    currency: &str,
    with_status: bool,
) -> Vec<Vec<String>> {
    cars.into_iter()
        .map(|car| {
            let mut row = vec![
                car.id().to_string(),
                car.display_name(),
                format_money(car.base_price_per_day(), currency),
            ];
            if with_status {
                let status = if car.is_available() {
                    "available"
                } else {
                    "rented"
                };
                row.push(status.to_string());
            }
            row
        })
        .collect()
}

/// Convert cars to a JSON array for output.
pub fn cars_json<'a>(cars: impl IntoIterator<Item = &'a Car>) -> Vec<serde_json::Value> {
    cars.into_iter()
        .map(|car| {
            serde_json::json!({
                "id": car.id(),
                "brand": car.brand(),
                "model": car.model(),
                "price_per_day": car.base_price_per_day(),
                "available": car.is_available(),
            })
        })
        .collect()
}

/// Rental information shown before the customer confirms.
pub fn quote_items(
    quote: &RentalQuote,
    customer_name: &str,
    currency: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("Customer Name", single_line(customer_name)),
        ("Car", quote.car_name()),
        ("Rental Days", quote.days.to_string()),
        ("Total Price", format_money(quote.total_price, currency)),
    ]
}

pub fn rental_receipt_items(
    receipt: &RentalReceipt,
    currency: &str,
    pretty: bool,
) -> Vec<(&'static str, String)> {
    vec![
        ("Customer ID", receipt.customer_id.clone()),
        ("Customer Name", single_line(&receipt.customer_name)),
        ("Car", receipt.car_name()),
        ("Rental Days", receipt.days.to_string()),
        ("Total Price", format_money(receipt.total_price, currency)),
        ("Opened", format_datetime(&receipt.opened_at, pretty)),
    ]
}

pub fn return_receipt_items(receipt: &ReturnReceipt, currency: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Customer ID", receipt.customer_id.clone()),
        ("Car", receipt.car_name()),
        ("Rental Days", receipt.days.to_string()),
        ("Total Price", format_money(receipt.total_price, currency)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::{default_catalog, RentalLedger};

    #[test]
    fn test_car_rows_with_status() {
        let mut ledger = RentalLedger::with_catalog(default_catalog()).unwrap();
        ledger.open_rental("C002", "Alice", 1).unwrap();

        let rows = car_rows(ledger.cars(), "$", true);
        assert_eq!(rows[0], vec!["C001", "Toyota Camry", "$100.00", "available"]);
        assert_eq!(rows[1][3], "rented");
        assert_eq!(car_columns(true).len(), rows[0].len());
    }

    #[test]
    fn test_cars_json_fields() {
        let cars = default_catalog();
        let json = cars_json(&cars);
        assert_eq!(json.len(), 3);
        assert_eq!(json[2]["id"], "C003");
        assert_eq!(json[2]["price_per_day"], "140");
        assert_eq!(json[2]["available"], true);
    }

    #[test]
    fn test_quote_items_format_total() {
        let ledger = RentalLedger::with_catalog(default_catalog()).unwrap();
        let quote = ledger.quote_rental("C001", 3).unwrap();
        let items = quote_items(&quote, "Alice", "$");
        assert!(items.contains(&("Total Price", "$300.00".to_string())));
        assert!(items.contains(&("Car", "Toyota Camry".to_string())));
    }

    #[test]
    fn test_return_items_name_total() {
        let mut ledger = RentalLedger::with_catalog(default_catalog()).unwrap();
        ledger.open_rental("C003", "Bo", 2).unwrap();
        let receipt = ledger.close_rental("C003").unwrap();
        let items = return_receipt_items(&receipt, "$");
        assert!(items.contains(&("Total Price", "$280.00".to_string())));
    }
}
