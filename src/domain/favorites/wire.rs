//! Wire types for the favorites endpoints.

use crate::shared::serde_util::decimal_number_opt;
use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One element of a favorites list.
///
/// The list endpoint sends objects; the add endpoint echoes bare symbols.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireFavorite {
    Bare(Symbol),
    Priced {
        symbol: Symbol,
        #[serde(default, deserialize_with = "decimal_number_opt::deserialize")]
        price: Option<Decimal>,
    },
}

/// `GET /favorites` and `POST /favorites` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoritesResponse {
    #[serde(default)]
    pub favorites: Vec<WireFavorite>,
}

/// `POST /favorites` body.
#[derive(Debug, Clone, Serialize)]
pub struct AddFavoriteRequest<'a> {
    pub symbol: &'a str,
}
