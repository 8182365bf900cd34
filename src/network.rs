//! Network and default-set constants.

/// Default REST API base URL (the dashboard backend on localhost).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "STOCKBOARD_API_URL";

/// Symbols shown in the watchlist when nothing else is configured.
pub const DEFAULT_WATCHLIST: [&str; 10] = [
    "AAPL", "GOOGL", "MSFT", "AMZN", "META", "TSLA", "GS", "DJIA", "SPX", "COMP",
];

/// Calendar months covered by a chart when no dates are chosen.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 6;
