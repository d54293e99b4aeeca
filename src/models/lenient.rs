//! Lenient deserializers for fields fed by the leave and employee services.
//!
//! Those services hand back whatever the request forms stored: day counts as
//! strings, dates as full timestamps. A bad value in a single record must
//! not reject the whole list.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses a calendar date from `YYYY-MM-DD` or a timestamp.
///
/// Timestamps are reduced to the date in their own offset.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Longest span a single record can declare. Larger counts are treated as
/// bad data.
pub const MAX_DAYS_PER_RECORD: Decimal = Decimal::from_parts(366, 0, 0, false, 0);

/// Deserializes a day count, mapping anything non-numeric or above
/// [`MAX_DAYS_PER_RECORD`] to zero.
pub(crate) fn days<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_days).unwrap_or(Decimal::ZERO))
}

fn parse_days(value: &Value) -> Option<Decimal> {
    let days = match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }?;
    (days <= MAX_DAYS_PER_RECORD).then_some(days)
}

/// Deserializes an optional calendar date; missing, non-string or
/// unparseable values become `None`.
pub(crate) fn optional_calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => parse_calendar_date(&raw),
        _ => None,
    })
}
