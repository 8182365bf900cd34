//! Async driver joining the data service, the aggregator and the view model.
//!
//! The presentation layer raises [`Intent`]s; `Dashboard` turns each into
//! store transitions around the awaited service call. Several intents may be
//! in flight at once on one thread: the store is only borrowed between
//! suspension points, never across one.

use crate::aggregator::SymbolAggregator;
use crate::config::DashboardConfig;
use crate::service::DataService;
use crate::shared::Symbol;
use crate::store::{Clock, SystemClock, ViewModelStore, ViewState};

use chrono::NaiveDate;
use futures_util::future::join;
use std::cell::{Ref, RefCell};

/// A user action raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetSymbol(Symbol),
    SetDateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    /// "Show current price" for the selected symbol.
    ShowPrice,
    /// Plot history for the given symbol, or the selected one.
    Plot(Option<Symbol>),
    AddFavorite,
    LoadFavorites,
    RefreshFavoritePrices,
    RefreshWatchlist,
}

/// One dashboard session.
pub struct Dashboard<S: DataService, C: Clock = SystemClock> {
    service: S,
    store: RefCell<ViewModelStore<C>>,
}

impl<S: DataService> Dashboard<S, SystemClock> {
    pub fn new(service: S, config: DashboardConfig) -> Self {
        Self::with_clock(service, config, SystemClock)
    }
}

impl<S: DataService, C: Clock> Dashboard<S, C> {
    pub fn with_clock(service: S, config: DashboardConfig, clock: C) -> Self {
        Self {
            service,
            store: RefCell::new(ViewModelStore::with_clock(config, clock)),
        }
    }

    /// Borrow the current view state. Drop the guard before awaiting.
    pub fn state(&self) -> Ref<'_, ViewState> {
        Ref::map(self.store.borrow(), |store| store.state())
    }

    /// Owned copy of the current view state.
    pub fn snapshot(&self) -> ViewState {
        self.store.borrow().state().clone()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run any intent to completion. Failures land in `last_error` or in
    /// per-row errors; nothing is returned or raised.
    pub async fn dispatch(&self, intent: Intent) {
        match intent {
            Intent::SetSymbol(symbol) => self.set_symbol(symbol),
            Intent::SetDateRange { start, end } => self.set_date_range(start, end),
            Intent::ShowPrice => self.show_price().await,
            Intent::Plot(symbol) => self.plot(symbol).await,
            Intent::AddFavorite => self.add_favorite().await,
            Intent::LoadFavorites => self.load_favorites().await,
            Intent::RefreshFavoritePrices => self.refresh_favorite_prices().await,
            Intent::RefreshWatchlist => self.refresh_watchlist().await,
        }
    }

    /// Startup: favorites list and watchlist batch, concurrently. Each fills
    /// its own field when it settles.
    pub async fn init_session(&self) {
        tracing::debug!("initializing dashboard session");
        join(self.load_favorites(), self.refresh_watchlist()).await;
    }

    pub fn set_symbol(&self, symbol: impl Into<Symbol>) {
        self.store.borrow_mut().set_symbol(symbol);
    }

    pub fn set_date_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.store.borrow_mut().set_date_range(start, end);
    }

    pub async fn show_price(&self) {
        let Ok(req) = self.store.borrow_mut().begin_price() else {
            return;
        };
        let result = self.service.current_price(&req.symbol).await;
        self.store.borrow_mut().complete_price(req, result);
    }

    pub async fn plot(&self, symbol_override: Option<Symbol>) {
        let Ok(req) = self.store.borrow_mut().begin_historical(symbol_override) else {
            return;
        };
        let result = self.service.historical_series(&req.symbol, req.range).await;
        self.store.borrow_mut().complete_historical(req, result);
    }

    pub async fn add_favorite(&self) {
        let Ok(req) = self.store.borrow_mut().begin_add_favorite() else {
            return;
        };
        let result = self.service.add_favorite(&req.symbol).await;
        self.store.borrow_mut().complete_add_favorite(req, result);
    }

    pub async fn load_favorites(&self) {
        let req = self.store.borrow_mut().begin_list_favorites();
        let result = self.service.list_favorites().await;
        self.store.borrow_mut().complete_list_favorites(req, result);
    }

    pub async fn refresh_favorite_prices(&self) {
        let req = self.store.borrow_mut().begin_favorite_prices();
        let results = SymbolAggregator::new(&self.service)
            .refresh_favorite_prices(&req.symbols)
            .await;
        self.store.borrow_mut().complete_favorite_prices(req, results);
    }

    pub async fn refresh_watchlist(&self) {
        let req = self.store.borrow_mut().begin_watchlist();
        let refresh = SymbolAggregator::new(&self.service)
            .refresh_watchlist(&req.symbols)
            .await;
        self.store.borrow_mut().complete_watchlist(req, refresh);
    }
}
