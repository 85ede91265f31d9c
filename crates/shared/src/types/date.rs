//! ISO-8601 calendar dates.
//!
//! Dates are compared as calendar days, never as instants. A date-time input
//! keeps the calendar day it was written with; its offset is not applied.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses an ISO-8601 date (`2024-01-31`) or date-time
/// (`2024-01-31T10:00:00Z`, `2024-01-31T10:00:00`) into its calendar date.
///
/// # Errors
///
/// Returns a description of the input if it is not an ISO-8601 date.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|_| format!("invalid ISO-8601 date: {s:?}"))
}

/// Serde adapter for `#[serde(deserialize_with = "...")]` on `NaiveDate` fields.
///
/// # Errors
///
/// Fails when the field is not a string or not an ISO-8601 date.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(serde::de::Error::custom)
}
