//! History sub-client: daily close queries.

use crate::client::MarketClient;
use crate::domain::history::{DateRange, HistoricalSeries};
use crate::error::{ErrorInfo, ErrorKind, HttpError};
use crate::shared::Symbol;

/// Sub-client for historical series.
pub struct History<'a> {
    pub(crate) client: &'a MarketClient,
}

impl<'a> History<'a> {
    /// Fails with `InvalidRange` before any I/O when `start > end`.
    pub async fn get(
        &self,
        symbol: &Symbol,
        range: DateRange,
    ) -> Result<HistoricalSeries, ErrorInfo> {
        range.validate()?;
        let resp = self
            .client
            .http
            .get_historical_data(symbol.as_str(), range.start, range.end)
            .await
            .map_err(|e| match e {
                // The only client-supplied inputs here are the dates.
                HttpError::BadRequest(body) => ErrorInfo::new(ErrorKind::InvalidRange, body),
                other => ErrorInfo::from(other),
            })?;
        Ok(resp.into())
    }
}
