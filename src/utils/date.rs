//! Front matter date normalization.
//!
//! Dates arrive either as text in one of several formats or as a YAML
//! timestamp (`2024-05-01`, `2024-05-01T08:30:00+08:00`). Both collapse into a
//! [`NaiveDate`]; anything unreadable becomes [`UNKNOWN_DATE`], which is the
//! minimum date and therefore sorts last when ordering newest first.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Sentinel for missing or unparseable dates.
pub const UNKNOWN_DATE: NaiveDate = NaiveDate::MIN;

/// Accepted textual formats, tried in order.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y年%m月%d日"];

/// YAML timestamp forms read as structured values.
const TIMESTAMP_DATE: &str = "%Y-%m-%d";
const TIMESTAMP_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A date value before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDate {
    /// Unparsed text, e.g. `"2024-05-01"` or `"2024年5月1日"`
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Missing,
}

impl From<Option<&str>> for RawDate {
    fn from(value: Option<&str>) -> Self {
        let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::Missing;
        };

        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Self::DateTime(datetime.naive_local());
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, TIMESTAMP_DATETIME) {
            return Self::DateTime(datetime);
        }
        match NaiveDate::parse_from_str(text, TIMESTAMP_DATE) {
            Ok(date) => Self::Date(date),
            Err(_) => Self::Text(text.to_owned()),
        }
    }
}

/// Normalize any raw date to a calendar date, dropping time of day.
pub fn normalize_date(raw: &RawDate) -> NaiveDate {
    match raw {
        RawDate::Date(date) => *date,
        RawDate::DateTime(datetime) => datetime.date(),
        RawDate::Text(text) => parse_date_text(text).unwrap_or(UNKNOWN_DATE),
        RawDate::Missing => UNKNOWN_DATE,
    }
}

/// Parse text with the accepted formats; first successful format wins.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        return Some(datetime.date());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Whether a normalized date is the unknown sentinel.
#[inline]
pub fn is_unknown(date: NaiveDate) -> bool {
    date == UNKNOWN_DATE
}
