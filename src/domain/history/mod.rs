//! History domain: daily closing prices for charting.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::ErrorInfo;
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

/// Closing prices sorted ascending by date, at most one point per date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoricalSeries {
    points: Vec<HistoricalPoint>,
}

impl HistoricalSeries {
    /// Sort by date and collapse duplicate dates (the later row wins).
    pub fn from_points(mut points: Vec<HistoricalPoint>) -> Self {
        // Stable sort keeps upstream order among equal dates.
        points.sort_by_key(|p| p.date);
        let mut deduped: Vec<HistoricalPoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }
        Self { points: deduped }
    }

    pub fn points(&self) -> &[HistoricalPoint] {
        &self.points
    }

    pub fn first(&self) -> Option<&HistoricalPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&HistoricalPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Chart labels, one per point.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Chart values, one per point.
    pub fn closes(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.points.iter().map(|p| p.close)
    }
}

/// Inclusive calendar-date range for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Fails with `InvalidRange` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ErrorInfo> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// `end` back to `end - months`, clamped to the month end
    /// (e.g. Aug 31 minus 6 months is Feb 28/29).
    pub fn trailing_months(end: NaiveDate, months: u32) -> Self {
        let start = end
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    pub fn validate(&self) -> Result<(), ErrorInfo> {
        if self.start > self.end {
            return Err(ErrorInfo::invalid_range(format!(
                "start date {} is after end date {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(date: NaiveDate, close: i64) -> HistoricalPoint {
        HistoricalPoint {
            date,
            close: Decimal::from(close),
        }
    }

    #[test]
    fn test_series_sorted_ascending() {
        let series = HistoricalSeries::from_points(vec![
            point(day(2024, 1, 3), 3),
            point(day(2024, 1, 1), 1),
            point(day(2024, 1, 2), 2),
        ]);
        let dates: Vec<_> = series.dates().collect();
        assert_eq!(dates, [day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)]);
    }

    #[test]
    fn test_series_duplicate_date_later_row_wins() {
        let series = HistoricalSeries::from_points(vec![
            point(day(2024, 1, 1), 1),
            point(day(2024, 1, 2), 2),
            point(day(2024, 1, 1), 9),
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().close, Decimal::from(9));
    }

    #[test]
    fn test_trailing_months_clamps_to_month_end() {
        let range = DateRange::trailing_months(day(2024, 8, 31), 6);
        assert_eq!(range.start, day(2024, 2, 29));
        assert_eq!(range.end, day(2024, 8, 31));
    }

    #[test]
    fn test_range_rejects_start_after_end() {
        let err = DateRange::new(day(2024, 2, 1), day(2024, 1, 1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRange);
        assert!(DateRange::new(day(2024, 1, 1), day(2024, 1, 1)).is_ok());
    }
}
