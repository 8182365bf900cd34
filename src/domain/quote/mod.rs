//! Quote domain: current price for a symbol.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current price of a symbol.
///
/// `price == None` is a valid, displayable state ("price not available"),
/// distinct from a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub symbol: Symbol,
    pub price: Option<Decimal>,
}

impl PriceQuote {
    pub fn new(symbol: Symbol, price: Option<Decimal>) -> Self {
        Self { symbol, price }
    }

    pub(crate) fn from_wire(symbol: Symbol, wire: wire::CurrentPriceResponse) -> Self {
        Self {
            symbol,
            price: wire.price,
        }
    }
}
