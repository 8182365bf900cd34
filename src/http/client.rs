//! Low-level HTTP client: `MarketHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the `MarketClient` boundary).

use crate::domain::favorites::wire::{AddFavoriteRequest, FavoritesResponse};
use crate::domain::history::wire::HistoricalDataResponse;
use crate::domain::quote::wire::CurrentPriceResponse;
use crate::domain::watchlist::wire::WatchlistResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Application-level error body: `{ "error": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pull the message out of an error body, falling back to the raw text.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) => body,
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Low-level HTTP client for the market-data REST API.
#[derive(Debug, Clone)]
pub struct MarketHttp {
    base_url: String,
    client: Client,
    /// Policy for idempotent GETs. POSTs never retry.
    read_retry: RetryPolicy,
}

impl MarketHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            read_retry: RetryPolicy::Idempotent,
        })
    }

    /// Override the retry policy applied to read endpoints.
    pub fn with_read_retry(mut self, policy: RetryPolicy) -> Self {
        self.read_retry = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Quotes ───────────────────────────────────────────────────────────

    pub async fn get_current_price(&self, symbol: &str) -> Result<CurrentPriceResponse, HttpError> {
        let url = format!(
            "{}/current_price?symbol={}",
            self.base_url,
            urlencoding::encode(symbol)
        );
        self.get(&url, self.read_retry.clone()).await
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn get_historical_data(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalDataResponse, HttpError> {
        let url = format!(
            "{}/historical_data?symbol={}&start_date={}&end_date={}",
            self.base_url,
            urlencoding::encode(symbol),
            iso_date(start),
            iso_date(end)
        );
        self.get(&url, self.read_retry.clone()).await
    }

    // ── Favorites ────────────────────────────────────────────────────────

    pub async fn get_favorites(&self) -> Result<FavoritesResponse, HttpError> {
        let url = format!("{}/favorites", self.base_url);
        self.get(&url, self.read_retry.clone()).await
    }

    pub async fn add_favorite(
        &self,
        request: &AddFavoriteRequest<'_>,
    ) -> Result<FavoritesResponse, HttpError> {
        let url = format!("{}/favorites", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub async fn get_watchlist(&self, symbols: &[&str]) -> Result<WatchlistResponse, HttpError> {
        let mut url = format!("{}/watchlist", self.base_url);
        if !symbols.is_empty() {
            let params: Vec<String> = symbols
                .iter()
                .map(|s| format!("symbols={}", urlencoding::encode(s)))
                .collect();
            url = format!("{}?{}", url, params.join("&"));
        }
        self.get(&url, self.read_retry.clone()).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(&method, url, body).await;
        };

        let mut attempt = 0;
        loop {
            let err = match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(err) => err,
            };
            if !config.should_retry(&err) {
                return Err(err);
            }
            if attempt == config.max_retries {
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: err.to_string(),
                });
            }

            let delay = config.delay_after(attempt, &err);
            tracing::debug!(
                %method,
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                "retrying {} after: {}",
                url,
                err
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            // Any failure here is the connection, not the payload.
            let text = resp
                .text()
                .await
                .map_err(|e| HttpError::BodyInterrupted(e.to_string()))?;
            return serde_json::from_str::<T>(&text).map_err(|e| HttpError::Decode(e.to_string()));
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = error_message(resp.text().await.unwrap_or_default());

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            408 => Err(HttpError::Timeout),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
