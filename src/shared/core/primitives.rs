// Shared value types used across modules.
//
// Day keys are canonical `YYYY-MM-DD` strings. They sort lexicographically in
// chronological order, which is why maps keyed by them are ordered maps.

use chrono::NaiveDate;

pub type EpochMillis = i64;

pub type DayKey = String;

pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn format_day_key(date: NaiveDate) -> DayKey {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Parses a canonical day key. Anything that is not exactly `YYYY-MM-DD` with
/// zero padding, or that names a date the calendar does not have, yields `None`.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let bytes = key.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

pub fn is_day_key(key: &str) -> bool {
    parse_day_key(key).is_some()
}

/// `YYYY-MM` prefix shared by every day key of a month.
pub fn month_prefix(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}
