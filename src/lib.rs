//! # Stockboard
//!
//! Client-side data layer for a stock market dashboard: quotes, historical
//! series, favorites and a batched watchlist, driven through one view model.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Symbols, domain models, error taxonomy (always available)
//! 2. **HTTP API**: `MarketHttp` with per-endpoint retry policies
//! 3. **High-Level Client**: `MarketClient` with nested sub-clients
//! 4. **Aggregation**: `SymbolAggregator` fans per-symbol lookups out and back in
//! 5. **View Model**: `ViewModelStore` state machine and the async `Dashboard` driver
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockboard::prelude::*;
//!
//! let client = MarketClient::builder()
//!     .base_url("http://127.0.0.1:5000")
//!     .build()?;
//!
//! let dashboard = Dashboard::new(client, DashboardConfig::default());
//! dashboard.init_session().await;
//! dashboard.set_symbol("AAPL");
//! dashboard.plot(None).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Error taxonomy shared by every layer.
pub mod error;

/// Network URL and default-set constants.
pub mod network;

/// The data-service seam consumed by the upper layers.
pub mod service;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `MarketClient`: the HTTP-backed data service.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Aggregation ─────────────────────────────────────────────────────

pub mod aggregator;

// ── Layer 5: View Model ──────────────────────────────────────────────────────

/// Session configuration.
pub mod config;

/// View state and its transitions.
pub mod store;

/// Async intent driver.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{format_price, format_return_pct, Symbol};

    // Domain types
    pub use crate::domain::favorites::FavoriteEntry;
    pub use crate::domain::history::{DateRange, HistoricalPoint, HistoricalSeries};
    pub use crate::domain::quote::PriceQuote;
    pub use crate::domain::watchlist::WatchEntry;

    // Errors
    pub use crate::error::{ErrorInfo, ErrorKind};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_WATCHLIST};

    // Service seam + aggregation
    pub use crate::aggregator::{SymbolAggregator, SymbolResult, WatchlistRefresh};
    pub use crate::service::DataService;

    // View model
    pub use crate::config::DashboardConfig;
    pub use crate::dashboard::{Dashboard, Intent};
    pub use crate::store::{
        Clock, DateSelection, FixedClock, RequestKind, SystemClock, ViewModelStore, ViewState,
        WatchRow,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        FavoritesClient, HistoryClient, MarketClient, MarketClientBuilder, QuotesClient,
        WatchlistClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
