// Month board read model.
//
// Purpose
// - Everything a calendar view of one month needs: each day's completion,
//   streak and due flags, week rows, and month statistics.
//
// Rules
// - Streaks run over the viewed month only and restart on its first day.
// - Due flags are derived; the stored one-shot flags are never touched here.

use crate::modules::meal_log::core::calendar::{
    WeekdayLocale, group_by_weeks, month_dates, weekday_label,
};
use crate::modules::meal_log::core::completion::completion_for;
use crate::modules::meal_log::core::due::DueFlags;
use crate::modules::meal_log::core::record::{DayRecord, RecordMap};
use crate::modules::meal_log::core::settings::Settings;
use crate::modules::meal_log::core::streaks::compute_streaks;
use crate::shared::core::primitives::{DayKey, format_day_key};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub date: DayKey,
    pub weekday: String,
    pub complete: bool,
    pub streak: u32,
    pub reward_due: bool,
    pub consequence_due: bool,
    pub is_today: bool,
    pub record: Option<DayRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total_complete: u32,
    pub longest_streak: u32,
    pub rewards_due: u32,
    pub consequences_due: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBoard {
    pub year: i32,
    pub month: u32,
    pub settings: Settings,
    pub days: Vec<DayView>,
    /// Day keys in rows of seven starting at the 1st.
    pub weeks: Vec<Vec<DayKey>>,
    pub stats: BoardStats,
}

impl MonthBoard {
    pub fn build(
        records: &RecordMap,
        settings: &Settings,
        today: NaiveDate,
        locale: WeekdayLocale,
    ) -> Self {
        let keys = month_dates(settings.year, settings.month);
        let is_complete = completion_for(records, settings);
        let streaks = compute_streaks(&keys, &is_complete);
        let today_key = format_day_key(today);

        let days: Vec<DayView> = keys
            .iter()
            .map(|key| {
                let record = records.get(key);
                let complete = is_complete(key);
                let streak = streaks.streak_at(key);
                let due = DueFlags::evaluate(complete, streak, record, settings.reward_interval);
                DayView {
                    date: key.clone(),
                    weekday: weekday_label(key, locale).unwrap_or_default().to_string(),
                    complete,
                    streak,
                    reward_due: due.reward_due,
                    consequence_due: due.consequence_due,
                    is_today: *key == today_key,
                    record: record.cloned(),
                }
            })
            .collect();

        let stats = days.iter().fold(
            BoardStats {
                longest_streak: streaks.longest,
                ..BoardStats::default()
            },
            |stats, day| BoardStats {
                total_complete: stats.total_complete + u32::from(day.complete),
                rewards_due: stats.rewards_due + u32::from(day.reward_due),
                consequences_due: stats.consequences_due + u32::from(day.consequence_due),
                ..stats
            },
        );

        Self {
            year: settings.year,
            month: settings.month,
            settings: settings.clone(),
            weeks: group_by_weeks(&keys),
            days,
            stats,
        }
    }

    pub fn day(&self, key: &str) -> Option<&DayView> {
        self.days.iter().find(|day| day.date == key)
    }
}
