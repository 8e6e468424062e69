//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Format an amount with two decimal places (e.g., "$300.00").
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount.round_dp(2))
}

/// Format a datetime for display.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_money_pads_cents() {
        assert_eq!(format_money(Decimal::from(300), "$"), "$300.00");
        assert_eq!(format_money(Decimal::new(14997, 2), "$"), "$149.97");
        assert_eq!(format_money(Decimal::new(5, 1), "EUR "), "EUR 0.50");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt, true), "2024-03-01 09:30 UTC");
        assert_eq!(format_datetime(&dt, false), "2024-03-01T09:30:00+00:00");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("hello\nworld"), "hello world");
        assert_eq!(single_line("no newlines"), "no newlines");
    }
}
