//! View-model state and its transition rules.
//!
//! [`ViewModelStore`] is the single writer of [`ViewState`]. Every operation is
//! split into a `begin_*` transition, which records the request and hands back
//! a ticket describing what to fetch, and a `complete_*` transition, which
//! merges the settled result. The I/O in between belongs to the caller (see
//! [`Dashboard`](crate::dashboard::Dashboard)), so the state machine can be
//! driven and tested without a network or a UI.

pub mod clock;
pub mod in_flight;
pub mod request;

pub use clock::{Clock, FixedClock, SystemClock};
pub use in_flight::InFlight;
pub use request::{RequestKind, RequestSequencer, RequestToken};

use crate::aggregator::{SymbolResult, WatchlistRefresh};
use crate::config::DashboardConfig;
use crate::domain::favorites::FavoriteEntry;
use crate::domain::history::{DateRange, HistoricalSeries};
use crate::domain::quote::PriceQuote;
use crate::domain::watchlist::WatchEntry;
use crate::error::ErrorInfo;
use crate::shared::{dedup_by_symbol, Symbol};

use chrono::NaiveDate;
use std::collections::HashMap;

// ─── View state ──────────────────────────────────────────────────────────────

/// Dates typed by the user. Either may be left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// The chart currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub symbol: Symbol,
    pub range: DateRange,
    pub series: HistoricalSeries,
}

/// One watchlist line: populated, or the reason it could not be.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchRow {
    pub symbol: Symbol,
    pub entry: Result<WatchEntry, ErrorInfo>,
}

/// Everything the presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub selected_symbol: Symbol,
    pub current_price: Option<PriceQuote>,
    pub date_range: DateSelection,
    pub chart: Option<Chart>,
    /// Server order; at most one entry per symbol.
    pub favorites: Vec<FavoriteEntry>,
    /// Per-row price failures from the last favorites price refresh.
    pub favorite_errors: HashMap<Symbol, ErrorInfo>,
    /// Fixed symbol order; at most one row per symbol.
    pub watchlist: Vec<WatchRow>,
    pub in_flight: InFlight,
    /// Only the most recent failure.
    pub last_error: Option<ErrorInfo>,
}

impl ViewState {
    pub fn chart_series(&self) -> Option<&HistoricalSeries> {
        self.chart.as_ref().map(|c| &c.series)
    }

    /// True while any request is outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight.any()
    }

    pub fn is_loading(&self, kind: RequestKind) -> bool {
        self.in_flight.is_loading(kind)
    }

    /// Populated watchlist entries, in watchlist order.
    pub fn watch_entries(&self) -> impl Iterator<Item = &WatchEntry> {
        self.watchlist.iter().filter_map(|row| row.entry.as_ref().ok())
    }

    pub fn favorite_symbols(&self) -> Vec<Symbol> {
        self.favorites.iter().map(|f| f.symbol.clone()).collect()
    }
}

// ─── Request tickets ─────────────────────────────────────────────────────────

/// A current-price lookup to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    pub token: RequestToken,
    pub symbol: Symbol,
}

/// A historical fetch to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalRequest {
    pub token: RequestToken,
    pub symbol: Symbol,
    pub range: DateRange,
}

/// A favorites list call to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesRequest {
    pub token: RequestToken,
}

/// An add-favorite call to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteAddRequest {
    pub token: RequestToken,
    pub symbol: Symbol,
}

/// A batch of symbols to look up (watchlist or favorite prices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub token: RequestToken,
    pub symbols: Vec<Symbol>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Single-writer state machine over [`ViewState`].
#[derive(Debug, Clone)]
pub struct ViewModelStore<C: Clock = SystemClock> {
    state: ViewState,
    sequencer: RequestSequencer,
    config: DashboardConfig,
    clock: C,
}

impl ViewModelStore<SystemClock> {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ViewModelStore<C> {
    pub fn with_clock(config: DashboardConfig, clock: C) -> Self {
        Self {
            state: ViewState::default(),
            sequencer: RequestSequencer::new(),
            config,
            clock,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ── Pure input transitions ───────────────────────────────────────────

    pub fn set_symbol(&mut self, symbol: impl Into<Symbol>) {
        self.state.selected_symbol = symbol.into();
    }

    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.state.date_range = DateSelection { start, end };
    }

    /// Explicit dates where given; otherwise end = today and
    /// start = today minus the configured lookback.
    pub fn effective_range(&self) -> Result<DateRange, ErrorInfo> {
        let today = self.clock.today();
        let fallback = DateRange::trailing_months(today, self.config.lookback());
        let selection = self.state.date_range;
        DateRange::new(
            selection.start.unwrap_or(fallback.start),
            selection.end.unwrap_or(fallback.end),
        )
    }

    // ── Current price ────────────────────────────────────────────────────

    pub fn begin_price(&mut self) -> Result<PriceRequest, ErrorInfo> {
        let symbol = self.require_symbol(None)?;
        let token = self.issue(RequestKind::Price);
        Ok(PriceRequest { token, symbol })
    }

    /// Success sets `current_price`, failure sets `last_error`; never both.
    pub fn complete_price(&mut self, req: PriceRequest, result: Result<PriceQuote, ErrorInfo>) {
        if !self.settle(req.token) {
            return;
        }
        match result {
            Ok(quote) => {
                self.state.current_price = Some(quote);
                self.state.last_error = None;
            }
            Err(err) => self.fail(err),
        }
    }

    // ── Historical ───────────────────────────────────────────────────────

    /// Resolves symbol and range. An invalid range is reported here and
    /// nothing is issued.
    pub fn begin_historical(
        &mut self,
        symbol_override: Option<Symbol>,
    ) -> Result<HistoricalRequest, ErrorInfo> {
        let symbol = self.require_symbol(symbol_override)?;
        let range = match self.effective_range() {
            Ok(range) => range,
            Err(err) => {
                self.fail(err.clone());
                return Err(err);
            }
        };
        let token = self.issue(RequestKind::Historical);
        Ok(HistoricalRequest {
            token,
            symbol,
            range,
        })
    }

    /// Only the most recently issued request may replace the chart. A failure
    /// keeps the chart already on screen.
    pub fn complete_historical(
        &mut self,
        req: HistoricalRequest,
        result: Result<HistoricalSeries, ErrorInfo>,
    ) {
        if !self.settle(req.token) {
            return;
        }
        match result {
            Ok(series) => {
                self.state.chart = Some(Chart {
                    symbol: req.symbol,
                    range: req.range,
                    series,
                });
                self.state.last_error = None;
            }
            Err(err) => self.fail(err),
        }
    }

    // ── Favorites ────────────────────────────────────────────────────────

    pub fn begin_list_favorites(&mut self) -> FavoritesRequest {
        let token = self.issue(RequestKind::FavoriteList);
        FavoritesRequest { token }
    }

    pub fn complete_list_favorites(
        &mut self,
        req: FavoritesRequest,
        result: Result<Vec<FavoriteEntry>, ErrorInfo>,
    ) {
        if !self.settle(req.token) {
            return;
        }
        match result {
            Ok(list) => {
                self.sequencer.commit(req.token);
                self.replace_favorites(list);
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn begin_add_favorite(&mut self) -> Result<FavoriteAddRequest, ErrorInfo> {
        let symbol = self.require_symbol(None)?;
        let token = self.issue(RequestKind::FavoriteAdd);
        Ok(FavoriteAddRequest { token, symbol })
    }

    /// Success replaces the whole collection with the server's list; the
    /// client never appends locally.
    pub fn complete_add_favorite(
        &mut self,
        req: FavoriteAddRequest,
        result: Result<Vec<FavoriteEntry>, ErrorInfo>,
    ) {
        if !self.settle(req.token) {
            return;
        }
        match result {
            Ok(list) => {
                self.sequencer.commit(req.token);
                self.replace_favorites(list);
                self.state.last_error = None;
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn begin_favorite_prices(&mut self) -> BatchRequest {
        let symbols = self.state.favorite_symbols();
        let token = self.issue(RequestKind::FavoritePrices);
        BatchRequest { token, symbols }
    }

    /// Merges per-row prices. Rows that failed keep their last price and get
    /// an entry in `favorite_errors`; symbols no longer favorited are ignored.
    pub fn complete_favorite_prices(
        &mut self,
        req: BatchRequest,
        results: Vec<SymbolResult<PriceQuote>>,
    ) {
        if !self.settle(req.token) {
            return;
        }
        for result in results {
            let Some(entry) = self
                .state
                .favorites
                .iter_mut()
                .find(|f| f.symbol == result.symbol)
            else {
                continue;
            };
            match result.outcome {
                Ok(quote) => {
                    entry.price = quote.price;
                    self.state.favorite_errors.remove(&result.symbol);
                }
                Err(err) => {
                    self.state.favorite_errors.insert(result.symbol, err);
                }
            }
        }
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub fn begin_watchlist(&mut self) -> BatchRequest {
        let symbols = self.config.watchlist().to_vec();
        let token = self.issue(RequestKind::Watchlist);
        BatchRequest { token, symbols }
    }

    /// A failed batch leaves the previous rows in place and sets `last_error`.
    pub fn complete_watchlist(&mut self, req: BatchRequest, refresh: WatchlistRefresh) {
        if !self.settle(req.token) {
            return;
        }
        if let Some(err) = refresh.batch_error {
            self.fail(err);
            return;
        }
        let rows: Vec<WatchRow> = refresh
            .results
            .into_iter()
            .map(|r| WatchRow {
                symbol: r.symbol,
                entry: r.outcome,
            })
            .collect();
        self.state.watchlist = dedup_by_symbol(rows, |row| &row.symbol);
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn issue(&mut self, kind: RequestKind) -> RequestToken {
        let token = self.sequencer.issue(kind);
        self.state.in_flight.start(kind);
        tracing::debug!(kind = %kind, seq = token.seq, "request issued");
        token
    }

    /// Marks the request settled. Returns false for stale responses, which
    /// must not touch anything else.
    fn settle(&mut self, token: RequestToken) -> bool {
        self.state.in_flight.finish(token.kind);
        if self.sequencer.admits(token) {
            return true;
        }
        tracing::debug!(kind = %token.kind, seq = token.seq, "discarding stale response");
        false
    }

    fn fail(&mut self, err: ErrorInfo) {
        tracing::debug!(kind = %err.kind, "operation failed: {}", err.message);
        self.state.last_error = Some(err);
    }

    fn require_symbol(&mut self, symbol_override: Option<Symbol>) -> Result<Symbol, ErrorInfo> {
        let symbol = symbol_override.unwrap_or_else(|| self.state.selected_symbol.clone());
        if symbol.is_blank() {
            let err = ErrorInfo::unknown("symbol is required");
            self.fail(err.clone());
            return Err(err);
        }
        Ok(symbol)
    }

    fn replace_favorites(&mut self, list: Vec<FavoriteEntry>) {
        self.state.favorites = dedup_by_symbol(list, |f| &f.symbol);
        self.state.favorite_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> ViewModelStore<FixedClock> {
        ViewModelStore::with_clock(
            DashboardConfig::new(["AAPL", "GOOGL"]),
            FixedClock(day(2024, 8, 31)),
        )
    }

    fn quote(symbol: &str, price: &str) -> PriceQuote {
        PriceQuote::new(Symbol::from(symbol), Some(Decimal::from_str(price).unwrap()))
    }

    fn series(close: i64) -> HistoricalSeries {
        HistoricalSeries::from_points(vec![crate::domain::history::HistoricalPoint {
            date: day(2024, 8, 30),
            close: Decimal::from(close),
        }])
    }

    fn fav(symbol: &str) -> FavoriteEntry {
        FavoriteEntry::new(Symbol::from(symbol), None)
    }

    #[test]
    fn test_set_symbol_is_pure() {
        let mut store = store();
        store.set_symbol("MSFT");
        assert_eq!(store.state().selected_symbol.as_str(), "MSFT");
        assert!(!store.state().loading());
    }

    #[test]
    fn test_price_success_sets_price_and_clears_error() {
        let mut store = store();
        store.set_symbol("AAPL");
        store.state.last_error = Some(ErrorInfo::unknown("old"));
        let req = store.begin_price().unwrap();
        assert!(store.state().is_loading(RequestKind::Price));
        store.complete_price(req, Ok(quote("AAPL", "190.12")));
        assert!(!store.state().loading());
        assert_eq!(store.state().current_price, Some(quote("AAPL", "190.12")));
        assert!(store.state().last_error.is_none());
    }

    #[test]
    fn test_price_failure_keeps_previous_price() {
        let mut store = store();
        store.set_symbol("AAPL");
        let req = store.begin_price().unwrap();
        store.complete_price(req, Ok(quote("AAPL", "190.12")));

        store.set_symbol("ZZZZ");
        let req = store.begin_price().unwrap();
        store.complete_price(req, Err(ErrorInfo::unavailable("connection reset")));
        assert_eq!(store.state().current_price, Some(quote("AAPL", "190.12")));
        assert_eq!(
            store.state().last_error.as_ref().map(|e| e.kind),
            Some(ErrorKind::Unavailable)
        );
    }

    #[test]
    fn test_blank_symbol_fails_without_issuing() {
        let mut store = store();
        assert!(store.begin_price().is_err());
        assert!(store.begin_add_favorite().is_err());
        assert!(!store.state().loading());
        assert_eq!(
            store.state().last_error.as_ref().map(|e| e.kind),
            Some(ErrorKind::Unknown)
        );
    }

    #[test]
    fn test_default_range_is_six_months_back() {
        let mut store = store();
        store.set_symbol("AAPL");
        let req = store.begin_historical(None).unwrap();
        assert_eq!(req.range.end, day(2024, 8, 31));
        assert_eq!(req.range.start, day(2024, 2, 29));
    }

    #[test]
    fn test_partial_selection_uses_defaults_per_field() {
        let mut store = store();
        store.set_symbol("AAPL");
        store.set_date_range(Some(day(2024, 6, 1)), None);
        let req = store.begin_historical(None).unwrap();
        assert_eq!(req.range, DateRange::new(day(2024, 6, 1), day(2024, 8, 31)).unwrap());
    }

    #[test]
    fn test_override_symbol_wins() {
        let mut store = store();
        store.set_symbol("AAPL");
        let req = store.begin_historical(Some(Symbol::from("TSLA"))).unwrap();
        assert_eq!(req.symbol.as_str(), "TSLA");
    }

    #[test]
    fn test_invalid_range_keeps_chart() {
        let mut store = store();
        store.set_symbol("AAPL");
        let req = store.begin_historical(None).unwrap();
        store.complete_historical(req, Ok(series(1)));

        store.set_date_range(Some(day(2024, 5, 1)), Some(day(2024, 4, 1)));
        let err = store.begin_historical(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRange);
        assert_eq!(store.state().chart_series(), Some(&series(1)));
        assert_eq!(store.state().last_error, Some(err));
        assert!(!store.state().loading());
    }

    #[test]
    fn test_last_issued_historical_wins() {
        let mut store = store();
        let a = store.begin_historical(Some(Symbol::from("A"))).unwrap();
        let b = store.begin_historical(Some(Symbol::from("B"))).unwrap();

        store.complete_historical(b, Ok(series(2)));
        assert!(store.state().is_loading(RequestKind::Historical));
        store.complete_historical(a, Ok(series(1)));

        let chart = store.state().chart.as_ref().unwrap();
        assert_eq!(chart.symbol.as_str(), "B");
        assert_eq!(chart.series, series(2));
        assert!(!store.state().loading());
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut store = store();
        let a = store.begin_historical(Some(Symbol::from("A"))).unwrap();
        let b = store.begin_historical(Some(Symbol::from("B"))).unwrap();
        store.complete_historical(b, Ok(series(2)));
        store.complete_historical(a, Err(ErrorInfo::not_found("A")));
        assert!(store.state().last_error.is_none());
    }

    #[test]
    fn test_historical_failure_keeps_stale_chart() {
        let mut store = store();
        store.set_symbol("AAPL");
        let req = store.begin_historical(None).unwrap();
        store.complete_historical(req, Ok(series(7)));
        let req = store.begin_historical(None).unwrap();
        store.complete_historical(req, Err(ErrorInfo::unavailable("down")));
        assert_eq!(store.state().chart_series(), Some(&series(7)));
        assert!(store.state().last_error.is_some());
    }

    #[test]
    fn test_loading_scopes_overlap() {
        let mut store = store();
        store.set_symbol("AAPL");
        let price = store.begin_price().unwrap();
        let chart = store.begin_historical(None).unwrap();
        store.complete_price(price, Ok(quote("AAPL", "1")));
        assert!(store.state().loading());
        assert!(!store.state().is_loading(RequestKind::Price));
        store.complete_historical(chart, Ok(series(1)));
        assert!(!store.state().loading());
    }

    #[test]
    fn test_add_favorite_replaces_with_server_list() {
        let mut store = store();
        store.set_symbol("TSLA");
        let list = store.begin_list_favorites();
        store.complete_list_favorites(list, Ok(vec![fav("MSFT")]));

        let add = store.begin_add_favorite().unwrap();
        assert_eq!(add.symbol, Symbol::from("TSLA"));
        // Nothing is appended before the server answers.
        assert_eq!(store.state().favorites, vec![fav("MSFT")]);

        store.complete_add_favorite(add, Ok(vec![fav("GS"), fav("TSLA"), fav("MSFT")]));
        assert_eq!(
            store.state().favorites,
            vec![fav("GS"), fav("TSLA"), fav("MSFT")]
        );
    }

    #[test]
    fn test_add_favorite_failure_leaves_list() {
        let mut store = store();
        store.set_symbol("TSLA");
        let list = store.begin_list_favorites();
        store.complete_list_favorites(list, Ok(vec![fav("MSFT")]));
        let add = store.begin_add_favorite().unwrap();
        store.complete_add_favorite(add, Err(ErrorInfo::unavailable("down")));
        assert_eq!(store.state().favorites, vec![fav("MSFT")]);
        assert!(store.state().last_error.is_some());
    }

    #[test]
    fn test_late_list_does_not_clobber_add() {
        let mut store = store();
        store.set_symbol("TSLA");
        let list = store.begin_list_favorites();
        let add = store.begin_add_favorite().unwrap();
        store.complete_add_favorite(add, Ok(vec![fav("MSFT"), fav("TSLA")]));
        store.complete_list_favorites(list, Ok(vec![fav("MSFT")]));
        assert_eq!(store.state().favorites, vec![fav("MSFT"), fav("TSLA")]);
    }

    #[test]
    fn test_earlier_add_survives_later_failed_add() {
        let mut store = store();
        store.set_symbol("AAPL");
        let first = store.begin_add_favorite().unwrap();
        store.set_symbol("MSFT");
        let second = store.begin_add_favorite().unwrap();

        store.complete_add_favorite(first, Ok(vec![fav("AAPL")]));
        store.complete_add_favorite(second, Err(ErrorInfo::unavailable("down")));

        assert_eq!(store.state().favorites, vec![fav("AAPL")]);
        assert_eq!(
            store.state().last_error.as_ref().map(|e| e.kind),
            Some(ErrorKind::Unavailable)
        );
        assert!(!store.state().is_loading(RequestKind::FavoriteAdd));
    }

    #[test]
    fn test_older_add_dropped_after_newer_add_applied() {
        let mut store = store();
        store.set_symbol("AAPL");
        let first = store.begin_add_favorite().unwrap();
        store.set_symbol("MSFT");
        let second = store.begin_add_favorite().unwrap();

        store.complete_add_favorite(second, Ok(vec![fav("AAPL"), fav("MSFT")]));
        store.complete_add_favorite(first, Ok(vec![fav("AAPL")]));

        assert_eq!(store.state().favorites, vec![fav("AAPL"), fav("MSFT")]);
    }

    #[test]
    fn test_favorites_deduplicated() {
        let mut store = store();
        let list = store.begin_list_favorites();
        store.complete_list_favorites(list, Ok(vec![fav("GS"), fav("GS")]));
        assert_eq!(store.state().favorites, vec![fav("GS")]);
    }

    #[test]
    fn test_favorite_prices_merge_per_row() {
        let mut store = store();
        let list = store.begin_list_favorites();
        store.complete_list_favorites(list, Ok(vec![fav("MSFT"), fav("ZZZZ")]));

        let req = store.begin_favorite_prices();
        assert_eq!(req.symbols, vec![Symbol::from("MSFT"), Symbol::from("ZZZZ")]);
        store.complete_favorite_prices(
            req,
            vec![
                SymbolResult {
                    symbol: Symbol::from("MSFT"),
                    outcome: Ok(quote("MSFT", "410.5")),
                },
                SymbolResult {
                    symbol: Symbol::from("ZZZZ"),
                    outcome: Err(ErrorInfo::not_found("ZZZZ")),
                },
                SymbolResult {
                    symbol: Symbol::from("GONE"),
                    outcome: Ok(quote("GONE", "1")),
                },
            ],
        );
        let favs = &store.state().favorites;
        assert_eq!(favs.len(), 2);
        assert_eq!(favs[0].price, Some(Decimal::from_str("410.5").unwrap()));
        assert_eq!(favs[1].price, None);
        assert_eq!(
            store.state().favorite_errors[&Symbol::from("ZZZZ")].kind,
            ErrorKind::NotFound
        );
        assert!(store.state().last_error.is_none());
    }

    #[test]
    fn test_watchlist_rows_in_fixed_order() {
        let mut store = store();
        let req = store.begin_watchlist();
        assert_eq!(req.symbols, vec![Symbol::from("AAPL"), Symbol::from("GOOGL")]);
        let aapl = WatchEntry {
            symbol: Symbol::from("AAPL"),
            price: Some(Decimal::from_str("190.12").unwrap()),
            trailing_return_pct: Decimal::from_str("12.5").unwrap(),
        };
        store.complete_watchlist(
            req,
            WatchlistRefresh {
                results: vec![
                    SymbolResult {
                        symbol: Symbol::from("AAPL"),
                        outcome: Ok(aapl.clone()),
                    },
                    SymbolResult {
                        symbol: Symbol::from("GOOGL"),
                        outcome: Err(ErrorInfo::not_found("GOOGL")),
                    },
                ],
                batch_error: None,
            },
        );
        let rows = &store.state().watchlist;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entry, Ok(aapl));
        assert_eq!(rows[1].symbol.as_str(), "GOOGL");
        assert_eq!(rows[1].entry.as_ref().unwrap_err().kind, ErrorKind::NotFound);
        assert_eq!(store.state().watch_entries().count(), 1);
    }

    #[test]
    fn test_watchlist_batch_failure_keeps_rows() {
        let mut store = store();
        let req = store.begin_watchlist();
        store.complete_watchlist(
            req,
            WatchlistRefresh {
                results: vec![SymbolResult {
                    symbol: Symbol::from("AAPL"),
                    outcome: Err(ErrorInfo::not_found("AAPL")),
                }],
                batch_error: None,
            },
        );
        let before = store.state().watchlist.clone();

        let req = store.begin_watchlist();
        let err = ErrorInfo::unavailable("timeout");
        store.complete_watchlist(
            req,
            WatchlistRefresh {
                results: vec![SymbolResult {
                    symbol: Symbol::from("AAPL"),
                    outcome: Err(err.clone()),
                }],
                batch_error: Some(err.clone()),
            },
        );
        assert_eq!(store.state().watchlist, before);
        assert_eq!(store.state().last_error, Some(err));
    }
}
