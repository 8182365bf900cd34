//! Quotes sub-client: current price lookups.

use crate::client::MarketClient;
use crate::domain::quote::PriceQuote;
use crate::error::ErrorInfo;
use crate::shared::Symbol;

/// Sub-client for current price lookups.
pub struct Quotes<'a> {
    pub(crate) client: &'a MarketClient,
}

impl<'a> Quotes<'a> {
    pub async fn get(&self, symbol: &Symbol) -> Result<PriceQuote, ErrorInfo> {
        let resp = self.client.http.get_current_price(symbol.as_str()).await?;
        Ok(PriceQuote::from_wire(symbol.clone(), resp))
    }
}
