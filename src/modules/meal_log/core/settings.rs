// Process-wide settings and partial updates to them.
//
// Invariants
// - reward_interval >= 1, month in 1..=12 and year inside the calendar's
//   supported range after `normalized`.
// - Labels are display text only and never affect computation.

use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::month_prefix;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const DEFAULT_REWARD_INTERVAL: u32 = 7;
pub const DEFAULT_MAJOR_REWARD_LABEL: &str = "重大奖励";
pub const DEFAULT_CONSEQUENCE_LABEL: &str = "惩罚";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub reward_interval: u32,
    pub require_commander_review: bool,
    pub month: u32,
    pub year: i32,
    pub major_reward_label: String,
    pub consequence_label: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot move {delta} months from {year}-{month:02}")]
pub struct PeriodOutOfRange {
    pub year: i32,
    pub month: u32,
    pub delta: i32,
}

impl From<PeriodOutOfRange> for ApplicationError {
    fn from(error: PeriodOutOfRange) -> Self {
        ApplicationError::Domain(error.to_string())
    }
}

/// Years the calendar can represent.
pub fn supported_years() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year()
}

fn clamp_year(year: i32) -> i32 {
    let years = supported_years();
    year.clamp(*years.start(), *years.end())
}

/// Any subset of settings fields. Numeric fields are wide so out-of-range input
/// can be clamped instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub reward_interval: Option<i64>,
    pub require_commander_review: Option<bool>,
    pub month: Option<i64>,
    pub year: Option<i32>,
    pub major_reward_label: Option<String>,
    pub consequence_label: Option<String>,
}

impl Settings {
    /// Default settings viewing the month that contains `today`.
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            reward_interval: DEFAULT_REWARD_INTERVAL,
            require_commander_review: true,
            month: today.month(),
            year: today.year(),
            major_reward_label: DEFAULT_MAJOR_REWARD_LABEL.to_string(),
            consequence_label: DEFAULT_CONSEQUENCE_LABEL.to_string(),
        }
    }

    pub fn normalized(mut self) -> Self {
        self.reward_interval = self.reward_interval.max(1);
        self.month = self.month.clamp(1, 12);
        self.year = clamp_year(self.year);
        self
    }

    pub fn apply(&self, patch: SettingsPatch) -> Self {
        let mut next = self.clone();
        if let Some(interval) = patch.reward_interval {
            next.reward_interval = u32::try_from(interval.max(1)).unwrap_or(u32::MAX);
        }
        if let Some(required) = patch.require_commander_review {
            next.require_commander_review = required;
        }
        if let Some(month) = patch.month {
            next.month = month.clamp(1, 12) as u32;
        }
        if let Some(year) = patch.year {
            next.year = year;
        }
        if let Some(label) = patch.major_reward_label {
            next.major_reward_label = label;
        }
        if let Some(label) = patch.consequence_label {
            next.consequence_label = label;
        }
        next.normalized()
    }

    /// Moves the viewed period by `delta` months, rolling the year over.
    /// Fails when the result leaves `supported_years`.
    pub fn shift_month(&self, delta: i32) -> Result<Self, PeriodOutOfRange> {
        let index = i64::from(self.year) * 12
            + i64::from(self.month.clamp(1, 12) - 1)
            + i64::from(delta);
        let year = i32::try_from(index.div_euclid(12))
            .ok()
            .filter(|year| supported_years().contains(year))
            .ok_or(PeriodOutOfRange {
                year: self.year,
                month: self.month,
                delta,
            })?;
        Ok(Self {
            year,
            month: index.rem_euclid(12) as u32 + 1,
            ..self.clone()
        })
    }

    pub fn period_prefix(&self) -> String {
        month_prefix(self.year, self.month)
    }
}

impl From<&Settings> for SettingsPatch {
    fn from(settings: &Settings) -> Self {
        Self {
            reward_interval: Some(i64::from(settings.reward_interval)),
            require_commander_review: Some(settings.require_commander_review),
            month: Some(i64::from(settings.month)),
            year: Some(settings.year),
            major_reward_label: Some(settings.major_reward_label.clone()),
            consequence_label: Some(settings.consequence_label.clone()),
        }
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn settings() -> Settings {
        Settings::starting_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[rstest]
    fn it_should_default_to_the_month_of_today(settings: Settings) {
        assert_eq!(settings.year, 2024);
        assert_eq!(settings.month, 1);
        assert_eq!(settings.reward_interval, 7);
        assert!(settings.require_commander_review);
        assert_eq!(settings.major_reward_label, "重大奖励");
    }

    #[rstest]
    fn it_should_clamp_when_normalizing(settings: Settings) {
        let raw = Settings {
            reward_interval: 0,
            month: 15,
            ..settings
        };
        let normalized = raw.normalized();
        assert_eq!(normalized.reward_interval, 1);
        assert_eq!(normalized.month, 12);
    }

    #[rstest]
    fn it_should_only_overwrite_present_fields(settings: Settings) {
        let patch = SettingsPatch {
            reward_interval: Some(-3),
            consequence_label: Some("Chores".into()),
            ..SettingsPatch::default()
        };
        let next = settings.apply(patch);
        assert_eq!(next.reward_interval, 1);
        assert_eq!(next.consequence_label, "Chores");
        assert_eq!(next.major_reward_label, settings.major_reward_label);
        assert_eq!(next.month, settings.month);
    }

    #[rstest]
    #[case(-1, 2023, 12)]
    #[case(1, 2024, 2)]
    #[case(12, 2025, 1)]
    #[case(-13, 2022, 12)]
    fn it_should_shift_the_viewed_month(
        settings: Settings,
        #[case] delta: i32,
        #[case] year: i32,
        #[case] month: u32,
    ) {
        let shifted = settings.shift_month(delta).unwrap();
        assert_eq!((shifted.year, shifted.month), (year, month));
    }

    #[rstest]
    #[case(i32::MAX)]
    #[case(i32::MIN)]
    fn it_should_refuse_a_shift_past_the_calendar(settings: Settings, #[case] delta: i32) {
        let error = settings.shift_month(delta).unwrap_err();
        assert_eq!(error.delta, delta);
        assert_eq!((error.year, error.month), (2024, 1));
    }

    #[rstest]
    fn it_should_clamp_an_extreme_year(settings: Settings) {
        let far = settings.apply(SettingsPatch {
            year: Some(300_000_000),
            month: Some(12),
            ..SettingsPatch::default()
        });
        assert_eq!(far.year, *supported_years().end());
        assert!(far.shift_month(1).is_err());
        let back = far.shift_month(-1).unwrap();
        assert_eq!((back.year, back.month), (far.year, 11));

        let early = settings.apply(SettingsPatch {
            year: Some(i32::MIN),
            ..SettingsPatch::default()
        });
        assert_eq!(early.year, *supported_years().start());
    }

    #[rstest]
    fn it_should_round_trip_through_a_full_patch(settings: Settings) {
        let other = Settings::starting_on(NaiveDate::from_ymd_opt(1999, 6, 1).unwrap());
        assert_eq!(other.apply(SettingsPatch::from(&settings)), settings);
        assert_eq!(settings.period_prefix(), "2024-01");
    }
}
