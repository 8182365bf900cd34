//! Unified error types.
//!
//! The HTTP layer speaks [`HttpError`]. Everything above it speaks
//! [`ErrorInfo`], the uniform shape the view model exposes to the UI.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Classification of a failed market-data operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The symbol is unknown to the upstream service.
    NotFound,
    /// Start date after end date.
    InvalidRange,
    /// Transport failure, timeout, 5xx, or retries exhausted.
    Unavailable,
    /// Anything unclassified.
    Unknown,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidRange => "invalid_range",
            Self::Unavailable => "unavailable",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform error surfaced by every data-service operation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRange, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unavailable, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Undecodable response: {0}")]
    Decode(String),

    #[error("Response body interrupted: {0}")]
    BodyInterrupted(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => is_transport_failure(e),
            HttpError::ServerError { status, .. } => *status >= 500,
            HttpError::RateLimited { .. }
            | HttpError::Timeout
            | HttpError::BodyInterrupted(_)
            | HttpError::MaxRetriesExceeded { .. } => true,
            HttpError::NotFound(_) | HttpError::BadRequest(_) | HttpError::Decode(_) => false,
        }
    }

    /// Server-requested wait before the next attempt, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            HttpError::RateLimited {
                retry_after_ms: Some(ms),
            } => Some(Duration::from_millis(*ms)),
            _ => None,
        }
    }
}

/// Connection, timeout, request and body failures. None of them says
/// anything about the request itself.
#[cfg(feature = "http")]
fn is_transport_failure(e: &reqwest::Error) -> bool {
    #[cfg(not(target_arch = "wasm32"))]
    let connect = e.is_connect();
    #[cfg(target_arch = "wasm32")]
    let connect = false;
    connect || e.is_timeout() || e.is_request() || e.is_body()
}

/// Upstream reports unknown tickers through its generic error body.
fn mentions_unknown_symbol(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("not found") || lower.contains("no data")
}

impl From<HttpError> for ErrorInfo {
    fn from(err: HttpError) -> Self {
        let message = err.to_string();
        match err {
            HttpError::NotFound(_) => ErrorInfo::not_found(message),
            HttpError::ServerError { ref body, .. } if mentions_unknown_symbol(body) => {
                ErrorInfo::not_found(body.clone())
            }
            HttpError::BadRequest(ref body) if mentions_unknown_symbol(body) => {
                ErrorInfo::not_found(body.clone())
            }
            HttpError::BadRequest(body) => ErrorInfo::unknown(body),
            HttpError::Decode(_) => ErrorInfo::unknown(message),
            #[cfg(feature = "http")]
            HttpError::Reqwest(ref e) if e.is_decode() => ErrorInfo::unknown(message),
            _ if err.is_transient() => ErrorInfo::unavailable(message),
            _ => ErrorInfo::unknown(message),
        }
    }
}
