// Commands that change one day record.
//
// `DayCommand` is also the JSON body accepted by the inbound adapter, tagged by
// `type`, e.g. `{"type": "setMealFlag", "slot": "meal1", "phase": "pre", "value": true}`.

use crate::modules::meal_log::core::record::{MealEntry, MealPhase, MealSlot};
use crate::modules::rooms::core::member::Actor;
use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DayCommand {
    SetMeal { slot: MealSlot, entry: MealEntry },
    SetMealFlag { slot: MealSlot, phase: MealPhase, value: bool },
    SetReview { reviewed: bool },
    SetReason { reason: Option<String> },
    GrantReward,
    ExecuteConsequence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDay {
    pub room_id: String,
    pub date: String,
    pub command: DayCommand,
    pub actor: Actor,
    pub at: EpochMillis,
}
