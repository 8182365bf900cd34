//! High-level client: `MarketClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessors, and the [`DataService`] impl.

use crate::domain::favorites::client::Favorites;
use crate::domain::favorites::FavoriteEntry;
use crate::domain::history::client::History;
use crate::domain::history::{DateRange, HistoricalSeries};
use crate::domain::quote::client::Quotes;
use crate::domain::quote::PriceQuote;
use crate::domain::watchlist::client::Watchlist;
use crate::domain::watchlist::WatchEntry;
use crate::error::{ErrorInfo, ErrorKind};
use crate::http::{MarketHttp, RetryPolicy, DEFAULT_TIMEOUT};
use crate::network::{API_URL_ENV, DEFAULT_API_URL};
use crate::service::DataService;
use crate::shared::Symbol;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::favorites::client::Favorites as FavoritesClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::watchlist::client::Watchlist as WatchlistClient;

/// HTTP implementation of [`DataService`].
///
/// Provides nested sub-client accessors for each domain:
/// `client.quotes()`, `client.history()`, etc.
#[derive(Debug, Clone)]
pub struct MarketClient {
    pub(crate) http: MarketHttp,
}

impl MarketClient {
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn favorites(&self) -> Favorites<'_> {
        Favorites { client: self }
    }

    pub fn watchlist(&self) -> Watchlist<'_> {
        Watchlist { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl DataService for MarketClient {
    async fn current_price(&self, symbol: &Symbol) -> Result<PriceQuote, ErrorInfo> {
        self.quotes().get(symbol).await
    }

    async fn historical_series(
        &self,
        symbol: &Symbol,
        range: DateRange,
    ) -> Result<HistoricalSeries, ErrorInfo> {
        self.history().get(symbol, range).await
    }

    async fn list_favorites(&self) -> Result<Vec<FavoriteEntry>, ErrorInfo> {
        self.favorites().list().await
    }

    async fn add_favorite(&self, symbol: &Symbol) -> Result<Vec<FavoriteEntry>, ErrorInfo> {
        self.favorites().add(symbol).await
    }

    async fn watchlist_batch(&self, symbols: &[Symbol]) -> Result<Vec<WatchEntry>, ErrorInfo> {
        self.watchlist().batch(symbols).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MarketClientBuilder {
    base_url: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl Default for MarketClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::Idempotent,
        }
    }
}

impl MarketClientBuilder {
    /// Defaults, with the base URL taken from `STOCKBOARD_API_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout; expiry surfaces as `Unavailable`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for read endpoints. Adding a favorite never retries.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn build(self) -> Result<MarketClient, ErrorInfo> {
        if self.base_url.trim().is_empty() {
            return Err(ErrorInfo::new(ErrorKind::Unknown, "base URL is empty"));
        }
        let http = MarketHttp::new(&self.base_url, self.timeout)
            .map_err(|e| ErrorInfo::new(ErrorKind::Unknown, e.to_string()))?
            .with_read_retry(self.retry_policy);
        Ok(MarketClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = MarketClient::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_base_url() {
        let client = MarketClient::builder()
            .base_url("http://localhost:8080/")
            .timeout(Duration::from_secs(2))
            .retry_policy(RetryPolicy::None)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_rejects_empty_url() {
        let err = MarketClient::builder().base_url("  ").build().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
    }
}
