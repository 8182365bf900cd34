//! Favorites domain: the user's curated symbol list, owned by the server.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A favorite symbol with its last known price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub symbol: Symbol,
    pub price: Option<Decimal>,
}

impl FavoriteEntry {
    pub fn new(symbol: Symbol, price: Option<Decimal>) -> Self {
        Self { symbol, price }
    }
}
