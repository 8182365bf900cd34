//! Wire types for the historical-data endpoint.

use crate::shared::serde_util::{calendar_date, decimal_number};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single row from the backend. Older backends name the date column `index`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalRow {
    #[serde(alias = "index", deserialize_with = "calendar_date::deserialize")]
    pub date: NaiveDate,
    #[serde(deserialize_with = "decimal_number::deserialize")]
    pub close: Decimal,
}

/// `GET /historical_data` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalDataResponse {
    #[serde(default)]
    pub data: Vec<HistoricalRow>,
}
