//! Field parsing utilities for BAPLIE segments
//!
//! This module provides helper functions for converting raw EDIFACT data
//! element values into typed values. None of them fail: a value that cannot
//! be read comes back as `None` (or unchanged, for display strings) and the
//! caller decides how to record the degradation.

use crate::constants::{DISPLAY_DATE_FORMAT, DISPLAY_TIMESTAMP_FORMAT, datetime};
use chrono::{NaiveDate, NaiveDateTime};

/// Parse a weight value; fractional values are truncated
pub fn parse_weight(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<i64>().ok().or_else(|| {
        parse_decimal(trimmed)
            .filter(|v| v.abs() < i64::MAX as f64)
            .map(|v| v.trunc() as i64)
    })
}

/// Parse a temperature value
pub fn parse_temperature(value: &str) -> Option<f64> {
    parse_decimal(value.trim())
}

/// Parse a decimal number accepting either `.` or `,` as decimal mark
pub fn parse_decimal(value: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }

    value
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Format a `DTM` value for display according to its format code
///
/// Format codes 101, 201 and 203 are honoured; without a code the layout is
/// inferred from the value length. Unreadable values are returned as given.
pub fn format_edi_datetime(value: &str, format_code: &str) -> String {
    let value = value.trim();

    let formatted = match (format_code.trim(), value.len()) {
        (datetime::FORMAT_YYMMDD, _) | ("", 6) => format_date(&format!("20{}", value)),
        (datetime::FORMAT_YYMMDDHHMM, _) | ("", 10) => format_datetime(&format!("20{}", value)),
        (datetime::FORMAT_CCYYMMDDHHMM, _) | ("", 12) => format_datetime(value),
        _ => None,
    };

    formatted.unwrap_or_else(|| value.to_string())
}

/// Format the `UNB` date/time pair for display
///
/// `date` is YYMMDD (syntax 1-3) or CCYYMMDD (syntax 4), `time` is HHMM and
/// may be empty.
pub fn format_interchange_datetime(date: &str, time: &str) -> String {
    let date = date.trim();
    let time = time.trim();

    let century_date = match date.len() {
        6 => format!("20{}", date),
        _ => date.to_string(),
    };

    let formatted = if time.len() == 4 {
        format_datetime(&format!("{}{}", century_date, time))
    } else {
        format_date(&century_date)
    };

    formatted.unwrap_or_else(|| date.to_string())
}

fn format_date(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .ok()
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
}

fn format_datetime(value: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M")
        .ok()
        .map(|dt| dt.format(DISPLAY_TIMESTAMP_FORMAT).to_string())
}
