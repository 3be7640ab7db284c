// Per-day record of the meal reporting routine.
//
// Records arrive from stores that may hold only a subset of the fields (older
// exports, partial merges from another device). Every field therefore has a
// default, and missing fields read as "not reported" / "not set".

use crate::modules::rooms::core::member::Role;
use crate::shared::core::primitives::{DayKey, EpochMillis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type RecordMap = BTreeMap<DayKey, DayRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    Meal1,
    Meal2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealPhase {
    Pre,
    Post,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealEntry {
    pub pre_reported: bool,
    pub post_reported: bool,
    // Text fields serialize as null when empty so a merge can clear them.
    pub pre_time: Option<String>,
    pub post_time: Option<String>,
    pub note: Option<String>,
}

impl MealEntry {
    pub fn is_fully_reported(&self) -> bool {
        self.pre_reported && self.post_reported
    }

    pub fn set_phase(&mut self, phase: MealPhase, value: bool) {
        match phase {
            MealPhase::Pre => self.pre_reported = value,
            MealPhase::Post => self.post_reported = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DayKey>,
    pub meal1: MealEntry,
    pub meal2: MealEntry,
    pub commander_reviewed: bool,
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_granted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequence_executed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by_role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<EpochMillis>,
}

impl DayRecord {
    /// Blank record created on the first edit of a day.
    pub fn new(date: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            reward_granted: Some(false),
            consequence_executed: Some(false),
            ..Self::default()
        }
    }

    pub fn meal(&self, slot: MealSlot) -> &MealEntry {
        match slot {
            MealSlot::Meal1 => &self.meal1,
            MealSlot::Meal2 => &self.meal2,
        }
    }

    pub fn meal_mut(&mut self, slot: MealSlot) -> &mut MealEntry {
        match slot {
            MealSlot::Meal1 => &mut self.meal1,
            MealSlot::Meal2 => &mut self.meal2,
        }
    }

    pub fn is_reward_granted(&self) -> bool {
        self.reward_granted.unwrap_or(false)
    }

    pub fn is_consequence_executed(&self) -> bool {
        self.consequence_executed.unwrap_or(false)
    }
}
