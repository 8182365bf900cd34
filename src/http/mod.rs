//! HTTP client layer: `MarketHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::{MarketHttp, DEFAULT_TIMEOUT};
pub use retry::{RetryConfig, RetryPolicy};
