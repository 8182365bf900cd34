//! Conversions from wire types to domain types for favorites.

use super::wire::{FavoritesResponse, WireFavorite};
use super::FavoriteEntry;
use crate::shared::dedup_by_symbol;

impl From<WireFavorite> for FavoriteEntry {
    fn from(wire: WireFavorite) -> Self {
        match wire {
            WireFavorite::Bare(symbol) => FavoriteEntry::new(symbol, None),
            WireFavorite::Priced { symbol, price } => FavoriteEntry::new(symbol, price),
        }
    }
}

/// Server order is kept; repeated symbols collapse to their first occurrence.
pub(crate) fn favorites_from_response(resp: FavoritesResponse) -> Vec<FavoriteEntry> {
    let entries: Vec<FavoriteEntry> = resp.favorites.into_iter().map(FavoriteEntry::from).collect();
    dedup_by_symbol(entries, |e| &e.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Symbol;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_priced_favorites() {
        let json = r#"{"favorites": [{"symbol": "MSFT", "price": 410.5}, {"symbol": "GS"}]}"#;
        let resp: FavoritesResponse = serde_json::from_str(json).unwrap();
        let favs = favorites_from_response(resp);
        assert_eq!(
            favs,
            vec![
                FavoriteEntry::new(Symbol::from("MSFT"), Some(Decimal::from_str("410.5").unwrap())),
                FavoriteEntry::new(Symbol::from("GS"), None),
            ]
        );
    }

    #[test]
    fn test_bare_symbol_favorites() {
        let json = r#"{"favorites": ["TSLA", "AAPL"]}"#;
        let resp: FavoritesResponse = serde_json::from_str(json).unwrap();
        let favs = favorites_from_response(resp);
        let symbols: Vec<_> = favs.iter().map(|f| f.symbol.as_str()).collect();
        assert_eq!(symbols, ["TSLA", "AAPL"]);
        assert!(favs.iter().all(|f| f.price.is_none()));
    }

    #[test]
    fn test_duplicate_favorites_collapse() {
        let json = r#"{"favorites": ["TSLA", {"symbol": "TSLA", "price": 1}, "AAPL"]}"#;
        let resp: FavoritesResponse = serde_json::from_str(json).unwrap();
        let favs = favorites_from_response(resp);
        assert_eq!(favs.len(), 2);
        assert_eq!(favs[0], FavoriteEntry::new(Symbol::from("TSLA"), None));
    }
}
