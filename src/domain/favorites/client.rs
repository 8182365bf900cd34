//! Favorites sub-client: list and add.

use crate::client::MarketClient;
use crate::domain::favorites::convert::favorites_from_response;
use crate::domain::favorites::wire::AddFavoriteRequest;
use crate::domain::favorites::FavoriteEntry;
use crate::error::ErrorInfo;
use crate::shared::Symbol;

/// Sub-client for the server-owned favorites list.
pub struct Favorites<'a> {
    pub(crate) client: &'a MarketClient,
}

impl<'a> Favorites<'a> {
    /// The authoritative list, in server order.
    pub async fn list(&self) -> Result<Vec<FavoriteEntry>, ErrorInfo> {
        let resp = self.client.http.get_favorites().await?;
        Ok(favorites_from_response(resp))
    }

    /// Add a symbol; returns the new authoritative list.
    pub async fn add(&self, symbol: &Symbol) -> Result<Vec<FavoriteEntry>, ErrorInfo> {
        let body = AddFavoriteRequest {
            symbol: symbol.as_str(),
        };
        let resp = self.client.http.add_favorite(&body).await?;
        Ok(favorites_from_response(resp))
    }
}
