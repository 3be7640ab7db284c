// Reward and consequence due rules.
//
// "Due" means eligible but not yet performed. These functions only read the
// one-shot flags; setting them is the job of explicit commands.

use crate::modules::meal_log::core::record::DayRecord;
use serde::Serialize;

pub fn reward_due(
    complete: bool,
    streak: u32,
    record: Option<&DayRecord>,
    reward_interval: u32,
) -> bool {
    let milestone = streak > 0 && streak.checked_rem(reward_interval) == Some(0);
    let granted = record.is_some_and(DayRecord::is_reward_granted);
    complete && milestone && !granted
}

pub fn consequence_due(complete: bool, record: Option<&DayRecord>) -> bool {
    let executed = record.is_some_and(DayRecord::is_consequence_executed);
    !complete && !executed
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueFlags {
    pub reward_due: bool,
    pub consequence_due: bool,
}

impl DueFlags {
    pub fn evaluate(
        complete: bool,
        streak: u32,
        record: Option<&DayRecord>,
        reward_interval: u32,
    ) -> Self {
        Self {
            reward_due: reward_due(complete, streak, record, reward_interval),
            consequence_due: consequence_due(complete, record),
        }
    }
}
