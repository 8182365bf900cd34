//! Display formatting for prices and returns.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a price the upstream could not supply.
pub const PRICE_NOT_AVAILABLE: &str = "Price not available";

fn two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// `Some(190.1234)` → `"$190.12"`, `None` → `"Price not available"`.
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) => format!("${}", two_places(p)),
        None => PRICE_NOT_AVAILABLE.to_string(),
    }
}

/// `12.5` → `"12.50%"`.
pub fn format_return_pct(pct: Decimal) -> String {
    format!("{}%", two_places(pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_price() {
        assert_eq!(
            format_price(Some(Decimal::from_str("190.125").unwrap())),
            "$190.13"
        );
        assert_eq!(format_price(Some(Decimal::from(5))), "$5.00");
        assert_eq!(format_price(None), "Price not available");
    }

    #[test]
    fn test_format_return_pct() {
        assert_eq!(format_return_pct(Decimal::from_str("12.5").unwrap()), "12.50%");
        assert_eq!(format_return_pct(Decimal::from_str("-3.456").unwrap()), "-3.46%");
    }
}
