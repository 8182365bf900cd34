//! Watchlist domain: a fixed symbol set with price and one-year return.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{format_price, format_return_pct, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub(crate) use convert::{entries_from_response, order_by_request};

/// A populated watchlist row. Rows the upstream failed on are never built
/// with placeholder fields; they are reported as errors instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchEntry {
    pub symbol: Symbol,
    pub price: Option<Decimal>,
    /// Percentage change over the trailing year, computed upstream.
    pub trailing_return_pct: Decimal,
}

impl WatchEntry {
    /// `"AAPL: $190.12 | 12.50% 1-Year Profit"`.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} | {} 1-Year Profit",
            self.symbol,
            format_price(self.price),
            format_return_pct(self.trailing_return_pct)
        )
    }
}
