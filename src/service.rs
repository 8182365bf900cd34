//! The data-service contract the aggregator and view model are written against.
//!
//! [`MarketClient`](crate::client::MarketClient) implements it over HTTP; tests
//! and embedders can supply their own.

use crate::domain::favorites::FavoriteEntry;
use crate::domain::history::{DateRange, HistoricalSeries};
use crate::domain::quote::PriceQuote;
use crate::domain::watchlist::WatchEntry;
use crate::error::ErrorInfo;
use crate::shared::Symbol;

/// Typed access to the remote market-data operations.
///
/// Every operation is stateless and safe to retry. Failures are normalized
/// to [`ErrorInfo`].
#[allow(async_fn_in_trait)]
pub trait DataService {
    /// Fails with `NotFound` for unknown symbols, `Unavailable` on transport errors.
    async fn current_price(&self, symbol: &Symbol) -> Result<PriceQuote, ErrorInfo>;

    /// Daily closes for `range`. Fails with `InvalidRange` when `start > end`.
    async fn historical_series(
        &self,
        symbol: &Symbol,
        range: DateRange,
    ) -> Result<HistoricalSeries, ErrorInfo>;

    /// Server-ordered favorites.
    async fn list_favorites(&self) -> Result<Vec<FavoriteEntry>, ErrorInfo>;

    /// Adds `symbol` and returns the new authoritative list. Mutating.
    async fn add_favorite(&self, symbol: &Symbol) -> Result<Vec<FavoriteEntry>, ErrorInfo>;

    /// One batched call. Entries follow the order of `symbols`; symbols the
    /// upstream skipped are absent from the result.
    async fn watchlist_batch(&self, symbols: &[Symbol]) -> Result<Vec<WatchEntry>, ErrorInfo>;
}
