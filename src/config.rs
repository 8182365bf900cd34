//! Session configuration for the view model.

use crate::network::{DEFAULT_LOOKBACK_MONTHS, DEFAULT_WATCHLIST};
use crate::shared::{dedup_by_symbol, Symbol};

/// What a dashboard session shows before the user does anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    watchlist: Vec<Symbol>,
    lookback_months: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WATCHLIST)
    }
}

impl DashboardConfig {
    /// Repeated watchlist symbols keep their first position.
    pub fn new<I, T>(watchlist: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = watchlist.into_iter().map(Into::into).collect();
        Self {
            watchlist: dedup_by_symbol(symbols, |s| s),
            lookback_months: DEFAULT_LOOKBACK_MONTHS,
        }
    }

    /// Months covered by the default chart range.
    pub fn lookback_months(mut self, months: u32) -> Self {
        self.lookback_months = months;
        self
    }

    pub fn watchlist(&self) -> &[Symbol] {
        &self.watchlist
    }

    pub fn lookback(&self) -> u32 {
        self.lookback_months
    }
}
