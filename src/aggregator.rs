//! Fan-out of per-symbol lookups into one settled result set.
//!
//! Two strategies:
//! - watchlist: a single batched call, one failure domain for the whole set;
//! - favorites: one concurrent price lookup per symbol, failures isolated per row.
//!
//! Nothing here touches view state; callers merge the results.

use crate::domain::quote::PriceQuote;
use crate::domain::watchlist::WatchEntry;
use crate::error::ErrorInfo;
use crate::service::DataService;
use crate::shared::Symbol;

use futures_util::future::join_all;
use std::collections::HashMap;

/// Outcome of one symbol's lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolResult<T> {
    pub symbol: Symbol,
    pub outcome: Result<T, ErrorInfo>,
}

impl<T> SymbolResult<T> {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Result of a watchlist refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistRefresh {
    /// Exactly one result per requested symbol, in request order.
    pub results: Vec<SymbolResult<WatchEntry>>,
    /// Set when the batch call itself failed. Every result then carries this
    /// error, and callers should keep whatever watchlist they already show.
    pub batch_error: Option<ErrorInfo>,
}

impl WatchlistRefresh {
    pub fn entries(&self) -> impl Iterator<Item = &WatchEntry> {
        self.results.iter().filter_map(|r| r.outcome.as_ref().ok())
    }
}

/// Issues data-service calls for sets of symbols.
pub struct SymbolAggregator<'a, S: DataService> {
    service: &'a S,
}

impl<'a, S: DataService> SymbolAggregator<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// One batched call for all `symbols`. A symbol missing from the
    /// response is recorded as `NotFound` for that symbol only.
    pub async fn refresh_watchlist(&self, symbols: &[Symbol]) -> WatchlistRefresh {
        match self.service.watchlist_batch(symbols).await {
            Ok(entries) => {
                let mut by_symbol: HashMap<Symbol, WatchEntry> =
                    HashMap::with_capacity(entries.len());
                for entry in entries {
                    by_symbol.entry(entry.symbol.clone()).or_insert(entry);
                }
                let results = symbols
                    .iter()
                    .map(|symbol| {
                        let outcome = match by_symbol.get(symbol) {
                            Some(entry) => Ok(entry.clone()),
                            None => {
                                tracing::warn!(%symbol, "watchlist response has no entry");
                                Err(ErrorInfo::not_found(format!(
                                    "no watchlist data for {}",
                                    symbol
                                )))
                            }
                        };
                        SymbolResult {
                            symbol: symbol.clone(),
                            outcome,
                        }
                    })
                    .collect();
                WatchlistRefresh {
                    results,
                    batch_error: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    symbols = symbols.len(),
                    kind = %err.kind,
                    "watchlist batch failed: {}",
                    err.message
                );
                let results = symbols
                    .iter()
                    .map(|symbol| SymbolResult {
                        symbol: symbol.clone(),
                        outcome: Err(err.clone()),
                    })
                    .collect();
                WatchlistRefresh {
                    results,
                    batch_error: Some(err),
                }
            }
        }
    }

    /// One concurrent price lookup per favorite. Waits for all to settle;
    /// results come back in input order whatever order they complete in.
    pub async fn refresh_favorite_prices(
        &self,
        favorites: &[Symbol],
    ) -> Vec<SymbolResult<PriceQuote>> {
        let lookups = favorites.iter().map(|symbol| async move {
            let outcome = self.service.current_price(symbol).await;
            if let Err(err) = &outcome {
                tracing::warn!(%symbol, kind = %err.kind, "price lookup failed: {}", err.message);
            }
            SymbolResult {
                symbol: symbol.clone(),
                outcome,
            }
        });
        join_all(lookups).await
    }
}
