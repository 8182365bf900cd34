//! Conversions from wire types to domain types for history.

use super::wire::{HistoricalDataResponse, HistoricalRow};
use super::{HistoricalPoint, HistoricalSeries};

impl From<HistoricalRow> for HistoricalPoint {
    fn from(row: HistoricalRow) -> Self {
        Self {
            date: row.date,
            close: row.close,
        }
    }
}

impl From<HistoricalDataResponse> for HistoricalSeries {
    fn from(resp: HistoricalDataResponse) -> Self {
        HistoricalSeries::from_points(resp.data.into_iter().map(HistoricalPoint::from).collect())
    }
}
