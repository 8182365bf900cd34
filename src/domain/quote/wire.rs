//! Wire types for the current-price endpoint.

use crate::shared::serde_util::decimal_number_opt;
use rust_decimal::Decimal;
use serde::Deserialize;

/// `GET /current_price?symbol=...` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentPriceResponse {
    #[serde(default, deserialize_with = "decimal_number_opt::deserialize")]
    pub price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_current_price_deserialize() {
        let resp: CurrentPriceResponse = serde_json::from_str(r#"{"price": 190.12}"#).unwrap();
        assert_eq!(resp.price, Some(Decimal::from_str("190.12").unwrap()));
    }

    #[test]
    fn test_current_price_null() {
        let resp: CurrentPriceResponse = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert!(resp.price.is_none());
    }
}
