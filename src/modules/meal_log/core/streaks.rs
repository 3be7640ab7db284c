// Streak calculator.
//
// Scans the ordered keys once. The streak stored for a day is the length of the
// run of complete days ending at (and including) that day; one incomplete day
// resets it to zero. Always recomputed in full.

use crate::shared::core::primitives::DayKey;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakReport {
    pub streaks: BTreeMap<DayKey, u32>,
    pub longest: u32,
}

impl StreakReport {
    pub fn streak_at(&self, key: &str) -> u32 {
        self.streaks.get(key).copied().unwrap_or(0)
    }
}

pub fn compute_streaks<K: AsRef<str>>(
    keys: &[K],
    is_complete: impl Fn(&str) -> bool,
) -> StreakReport {
    let mut report = StreakReport::default();
    let mut current = 0u32;
    for key in keys {
        let key = key.as_ref();
        current = if is_complete(key) { current + 1 } else { 0 };
        report.streaks.insert(key.to_string(), current);
        report.longest = report.longest.max(current);
    }
    report
}
