//! Conversions from wire types to domain types for the watchlist.

use super::wire::{WatchlistResponse, WatchlistRow, WireWatchRow};
use super::WatchEntry;
use crate::shared::Symbol;
use std::collections::HashMap;

impl From<WatchlistRow> for WatchEntry {
    fn from(row: WatchlistRow) -> Self {
        Self {
            symbol: row.symbol,
            price: row.price,
            trailing_return_pct: row.profit,
        }
    }
}

/// Decoded entries of a batch response. Malformed rows are skipped, which
/// leaves their symbols absent from the result.
pub(crate) fn entries_from_response(resp: WatchlistResponse) -> Vec<WatchEntry> {
    resp.watchlist
        .into_iter()
        .filter_map(|row| match row {
            WireWatchRow::Valid(row) => Some(WatchEntry::from(row)),
            WireWatchRow::Malformed(raw) => {
                let symbol = raw.get("symbol").and_then(|s| s.as_str()).unwrap_or("?");
                tracing::warn!(symbol, "skipping malformed watchlist row");
                None
            }
        })
        .collect()
}

/// Reorder entries to follow `requested`, dropping symbols nobody asked for
/// and keeping the first entry when the upstream repeats a symbol.
pub(crate) fn order_by_request(entries: Vec<WatchEntry>, requested: &[Symbol]) -> Vec<WatchEntry> {
    let mut by_symbol: HashMap<Symbol, WatchEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        by_symbol.entry(entry.symbol.clone()).or_insert(entry);
    }
    requested
        .iter()
        .filter_map(|symbol| by_symbol.remove(symbol))
        .collect()
}
