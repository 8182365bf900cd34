//! Wire types for the watchlist batch endpoint.

use crate::shared::serde_util::{decimal_number, decimal_number_opt};
use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of the batch response. `profit` is the trailing return in percent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchlistRow {
    pub symbol: Symbol,
    #[serde(default, deserialize_with = "decimal_number_opt::deserialize")]
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "decimal_number::deserialize")]
    pub profit: Decimal,
}

/// A batch row as received. Rows that do not decode are kept raw so one bad
/// row cannot fail the whole batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireWatchRow {
    Valid(WatchlistRow),
    Malformed(serde_json::Value),
}

/// `GET /watchlist?symbols=...` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchlistResponse {
    #[serde(default)]
    pub watchlist: Vec<WireWatchRow>,
}
