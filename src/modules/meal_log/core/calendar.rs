// Date axis utilities: month lengths, month date keys, weekday labels and
// fixed-size week chunks.
//
// Boundaries
// - Pure functions. No clock access; callers pass dates in.

use crate::shared::core::primitives::{DayKey, format_day_key, parse_day_key};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DAYS_PER_WEEK: usize = 7;

const WEEKDAYS_ZH: [&str; DAYS_PER_WEEK] = [
    "周一",
    "周二",
    "周三",
    "周四",
    "周五",
    "周六",
    "周日",
];
const WEEKDAYS_EN: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayLocale {
    #[default]
    Zh,
    En,
}

impl FromStr for WeekdayLocale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(WeekdayLocale::Zh),
            "en" => Ok(WeekdayLocale::En),
            other => Err(format!("unknown locale '{other}'")),
        }
    }
}

impl WeekdayLocale {
    fn labels(self) -> &'static [&'static str; DAYS_PER_WEEK] {
        match self {
            WeekdayLocale::Zh => &WEEKDAYS_ZH,
            WeekdayLocale::En => &WEEKDAYS_EN,
        }
    }
}

/// Number of days in a 1-indexed month. Out-of-range months and years have
/// zero days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(0)
}

pub fn month_dates(year: i32, month: u32) -> Vec<DayKey> {
    (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(format_day_key)
        .collect()
}

/// Monday-first weekday label for a day key.
pub fn weekday_label(key: &str, locale: WeekdayLocale) -> Option<&'static str> {
    let date = parse_day_key(key)?;
    let index = date.weekday().num_days_from_monday() as usize;
    Some(locale.labels()[index])
}

/// Chunks keys into groups of seven, starting at the first key. No calendar
/// alignment is applied; the final group may be shorter.
pub fn group_by_weeks<K: Clone>(keys: &[K]) -> Vec<Vec<K>> {
    keys.chunks(DAYS_PER_WEEK).map(<[K]>::to_vec).collect()
}

/// Every calendar day from `start` through `end`, inclusive. Empty when `start`
/// lies after `end`.
pub fn date_axis(start: NaiveDate, end: NaiveDate) -> Vec<DayKey> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(format_day_key)
        .collect()
}
