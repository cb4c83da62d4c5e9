//! Display formatting for API timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

/// Long-form date, e.g. `"January 5, 2024"`.
///
/// Accepts RFC 3339 timestamps, offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`, or a
/// bare `YYYY-MM-DD`. The calendar date is taken as written. Empty input
/// yields an empty string.
pub fn format_date(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }
    parse_date(input).map_or_else(|| INVALID_DATE.to_owned(), |date| date.format("%B %-d, %Y").to_string())
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .ok()
}

/// Display titles from a listing payload.
///
/// Accepts a bare array or an object with an `items` array; each entry
/// contributes its `title`, falling back to `name`. Entries with neither are
/// skipped.
pub fn list_titles(payload: &serde_json::Value) -> Vec<String> {
    let entries = match payload {
        serde_json::Value::Array(items) => items.as_slice(),
        serde_json::Value::Object(map) => map.get("items").and_then(serde_json::Value::as_array).map_or(&[][..], Vec::as_slice),
        _ => &[],
    };
    entries
        .iter()
        .filter_map(|entry| entry.get("title").or_else(|| entry.get("name")))
        .filter_map(serde_json::Value::as_str)
        .map(str::to_owned)
        .collect()
}
