//! Watchlist sub-client: one batched request for many symbols.

use crate::client::MarketClient;
use crate::domain::watchlist::{entries_from_response, order_by_request, WatchEntry};
use crate::error::ErrorInfo;
use crate::shared::Symbol;

/// Sub-client for the watchlist batch endpoint.
pub struct Watchlist<'a> {
    pub(crate) client: &'a MarketClient,
}

impl<'a> Watchlist<'a> {
    /// Entries follow the order of `symbols`; symbols the upstream skipped are absent.
    pub async fn batch(&self, symbols: &[Symbol]) -> Result<Vec<WatchEntry>, ErrorInfo> {
        let raw: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        let resp = self.client.http.get_watchlist(&raw).await?;
        Ok(order_by_request(entries_from_response(resp), symbols))
    }
}
