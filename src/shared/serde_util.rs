//! Custom serde helpers for backend wire formats.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// A JSON value the backend uses for money: a float, an integer, or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Float(f64),
    Text(String),
}

fn to_decimal(raw: RawNumber) -> Result<Decimal, String> {
    let text = match raw {
        // `f64::to_string` is the shortest round-trip form, so 190.12 stays 190.12.
        RawNumber::Float(f) if f.is_finite() => f.to_string(),
        RawNumber::Float(f) => return Err(format!("non-finite number: {}", f)),
        RawNumber::Text(s) => s,
    };
    Decimal::from_str(text.trim())
        .or_else(|_| Decimal::from_scientific(text.trim()))
        .map_err(|e| format!("invalid decimal '{}': {}", text, e))
}

/// Deserializes a JSON number or numeric string into `Decimal`.
pub mod decimal_number {
    use super::{to_decimal, RawNumber};
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawNumber::deserialize(deserializer)?;
        to_decimal(raw).map_err(serde::de::Error::custom)
    }
}

/// Like [`decimal_number`], but `null` becomes `None`.
///
/// Pair with `#[serde(default)]` so a missing field is also `None`.
pub mod decimal_number_opt {
    use super::{to_decimal, RawNumber};
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawNumber>::deserialize(deserializer)?
            .map(to_decimal)
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

/// Deserializes a calendar date from `YYYY-MM-DD`, RFC 3339, or an
/// RFC 2822 / HTTP-date string (`Mon, 15 Jan 2024 00:00:00 GMT`).
pub mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer};

    pub fn parse(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(d);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Some(dt.date_naive());
        }
        // Naive ISO timestamp without offset, e.g. `2024-01-15T00:00:00`.
        s.get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid date: {}", s)))
    }
}
