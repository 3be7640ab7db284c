// Seven-day bucket aggregator.
//
// Purpose
// - Partition every day from the first recorded day through `today` into
//   consecutive windows of seven and tally rewards and punishments per window.
//
// Rules
// - Only canonical day keys count when looking for the first recorded day.
// - Days without a record are incomplete.
// - A window earns a reward only with seven days, all complete. Short final
//   windows never earn one but still count their incomplete days.
// - Independent of the viewed month. `today` is supplied by the caller.

use crate::modules::meal_log::core::calendar::{DAYS_PER_WEEK, date_axis};
use crate::modules::meal_log::core::record::RecordMap;
use crate::shared::core::primitives::{DayKey, parse_day_key};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    pub start: DayKey,
    pub end: DayKey,
    pub days: Vec<DayKey>,
    pub reward_count: u32,
    pub punish_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTotals {
    pub reward_count: u32,
    pub punish_count: u32,
}

pub fn first_recorded_day(records: &RecordMap) -> Option<NaiveDate> {
    records.keys().filter_map(|key| parse_day_key(key)).min()
}

pub fn seven_day_buckets(
    records: &RecordMap,
    is_complete: impl Fn(&str) -> bool,
    today: NaiveDate,
) -> Vec<WeeklyBucket> {
    let Some(start) = first_recorded_day(records) else {
        return Vec::new();
    };
    date_axis(start, today)
        .chunks(DAYS_PER_WEEK)
        .map(|chunk| {
            let incomplete = chunk.iter().filter(|key| !is_complete(key.as_str())).count() as u32;
            let full_week = chunk.len() == DAYS_PER_WEEK;
            WeeklyBucket {
                start: chunk[0].clone(),
                end: chunk[chunk.len() - 1].clone(),
                days: chunk.to_vec(),
                reward_count: u32::from(full_week && incomplete == 0),
                punish_count: incomplete,
            }
        })
        .collect()
}

pub fn bucket_totals(buckets: &[WeeklyBucket]) -> BucketTotals {
    buckets.iter().fold(BucketTotals::default(), |totals, bucket| BucketTotals {
        reward_count: totals.reward_count + bucket.reward_count,
        punish_count: totals.punish_count + bucket.punish_count,
    })
}
