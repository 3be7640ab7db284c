// Completion predicate: whether a day counts as "complete".
//
// A day is complete when both meals were reported before and after, and, if the
// settings require it, the commander reviewed the day. A day without a record
// is never complete.

use crate::modules::meal_log::core::record::{DayRecord, RecordMap};
use crate::modules::meal_log::core::settings::Settings;

pub fn is_complete(record: Option<&DayRecord>, settings: &Settings) -> bool {
    let Some(record) = record else {
        return false;
    };
    let meals_reported = record.meal1.is_fully_reported() && record.meal2.is_fully_reported();
    let review_satisfied = !settings.require_commander_review || record.commander_reviewed;
    meals_reported && review_satisfied
}

/// Predicate over day keys, bound to one snapshot of records and settings.
pub fn completion_for<'a>(
    records: &'a RecordMap,
    settings: &'a Settings,
) -> impl Fn(&str) -> bool + 'a {
    move |key| is_complete(records.get(key), settings)
}
