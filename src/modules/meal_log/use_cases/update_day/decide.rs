// Pure decision function for day edits.
//
// Rules
// - Readonly actors and visitors may not edit anything.
// - Meals and the reason need a participant or the commander; review, reward
//   and consequence bookkeeping need the commander.
// - GrantReward needs the reward to be due, ExecuteConsequence the consequence.
//   Repeating either one after it happened is a no-op.
// - No command clears a one-shot flag.
// - Every accepted record carries who changed it and when.

use crate::modules::meal_log::core::calendar::month_dates;
use crate::modules::meal_log::core::completion::{completion_for, is_complete};
use crate::modules::meal_log::core::due::{consequence_due, reward_due};
use crate::modules::meal_log::core::permissions::{EditArea, actor_can_edit};
use crate::modules::meal_log::core::record::{DayRecord, RecordMap};
use crate::modules::meal_log::core::settings::Settings;
use crate::modules::meal_log::core::streaks::compute_streaks;
use crate::modules::meal_log::use_cases::update_day::command::{DayCommand, UpdateDay};
use crate::modules::meal_log::use_cases::update_day::decision::{DecideError, Decision};
use crate::shared::core::primitives::{is_day_key, parse_day_key};
use chrono::Datelike;

/// What the decider knows about the day, taken from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayContext {
    pub current: Option<DayRecord>,
    pub complete: bool,
    pub streak: u32,
    pub reward_interval: u32,
}

impl DayContext {
    /// Streaks run over the month containing `date`, the same run the month
    /// board shows for it.
    pub fn from_snapshot(records: &RecordMap, settings: &Settings, date: &str) -> Self {
        let streak = parse_day_key(date)
            .map(|day| {
                let keys = month_dates(day.year(), day.month());
                compute_streaks(&keys, completion_for(records, settings)).streak_at(date)
            })
            .unwrap_or(0);
        Self {
            current: records.get(date).cloned(),
            complete: is_complete(records.get(date), settings),
            streak,
            reward_interval: settings.reward_interval,
        }
    }
}

impl DayCommand {
    pub fn area(&self) -> EditArea {
        match self {
            DayCommand::SetMeal { .. }
            | DayCommand::SetMealFlag { .. }
            | DayCommand::SetReason { .. } => EditArea::Meals,
            DayCommand::SetReview { .. }
            | DayCommand::GrantReward
            | DayCommand::ExecuteConsequence => EditArea::Commander,
        }
    }
}

pub fn decide_update_day(context: &DayContext, update: UpdateDay) -> Decision {
    if !is_day_key(&update.date) {
        return Decision::Rejected {
            reason: DecideError::MalformedDate(update.date),
        };
    }
    if !actor_can_edit(&update.actor, update.command.area()) {
        return Decision::Rejected {
            reason: DecideError::Forbidden {
                role: update.actor.role,
            },
        };
    }

    let current = context.current.as_ref();
    let mut record = context
        .current
        .clone()
        .unwrap_or_else(|| DayRecord::new(&update.date));

    match update.command {
        DayCommand::SetMeal { slot, entry } => *record.meal_mut(slot) = entry,
        DayCommand::SetMealFlag { slot, phase, value } => {
            record.meal_mut(slot).set_phase(phase, value)
        }
        DayCommand::SetReview { reviewed } => record.commander_reviewed = reviewed,
        DayCommand::SetReason { reason } => {
            record.reason = reason.filter(|text| !text.trim().is_empty())
        }
        DayCommand::GrantReward => {
            if record.is_reward_granted() {
                return Decision::Unchanged { record };
            }
            if !reward_due(context.complete, context.streak, current, context.reward_interval) {
                return Decision::Rejected {
                    reason: DecideError::RewardNotDue,
                };
            }
            record.reward_granted = Some(true);
        }
        DayCommand::ExecuteConsequence => {
            if record.is_consequence_executed() {
                return Decision::Unchanged { record };
            }
            if !consequence_due(context.complete, current) {
                return Decision::Rejected {
                    reason: DecideError::ConsequenceNotDue,
                };
            }
            record.consequence_executed = Some(true);
        }
    }

    record.date = Some(update.date);
    record.updated_by_uid = Some(update.actor.uid);
    record.updated_by_role = Some(update.actor.role);
    record.updated_at = Some(update.at);
    Decision::Accepted { record }
}

#[cfg(test)]
mod update_day_decide_tests {
    use super::*;
    use crate::modules::meal_log::core::record::{MealEntry, MealPhase, MealSlot};
    use crate::modules::rooms::core::member::Role;
    use crate::tests::fixtures::{DayRecordBuilder, actor, complete_days, settings_fixture};
    use rstest::{fixture, rstest};

    const DATE: &str = "2024-01-07";
    const AT: i64 = 1_704_585_600_000;

    #[fixture]
    fn empty_day() -> DayContext {
        DayContext {
            current: None,
            complete: false,
            streak: 0,
            reward_interval: 7,
        }
    }

    #[fixture]
    fn milestone_day() -> DayContext {
        DayContext {
            current: Some(DayRecordBuilder::complete(DATE).build()),
            complete: true,
            streak: 7,
            reward_interval: 7,
        }
    }

    fn update(role: Role, command: DayCommand) -> UpdateDay {
        UpdateDay {
            room_id: "family-01".into(),
            date: DATE.into(),
            command,
            actor: actor(role),
            at: AT,
        }
    }

    fn accepted(decision: Decision) -> DayRecord {
        match decision {
            Decision::Accepted { record } => record,
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_create_the_record_on_first_edit_and_stamp_provenance(empty_day: DayContext) {
        let command = DayCommand::SetMealFlag {
            slot: MealSlot::Meal1,
            phase: MealPhase::Pre,
            value: true,
        };
        let record = accepted(decide_update_day(&empty_day, update(Role::Participant, command)));

        assert!(record.meal1.pre_reported);
        assert!(!record.meal1.post_reported);
        assert_eq!(record.date.as_deref(), Some(DATE));
        assert_eq!(record.reward_granted, Some(false));
        assert_eq!(record.consequence_executed, Some(false));
        assert_eq!(record.updated_by_uid.as_deref(), Some("participant-fixed-0001"));
        assert_eq!(record.updated_by_role, Some(Role::Participant));
        assert_eq!(record.updated_at, Some(AT));
    }

    #[rstest]
    fn it_should_replace_a_whole_meal_entry(empty_day: DayContext) {
        let entry = MealEntry {
            pre_reported: true,
            post_reported: true,
            pre_time: Some("07:30".into()),
            post_time: Some("08:10".into()),
            note: None,
        };
        let command = DayCommand::SetMeal {
            slot: MealSlot::Meal2,
            entry: entry.clone(),
        };
        let record = accepted(decide_update_day(&empty_day, update(Role::Commander, command)));
        assert_eq!(record.meal2, entry);
        assert_eq!(record.meal1, MealEntry::default());
    }

    #[rstest]
    fn it_should_drop_a_blank_reason(empty_day: DayContext) {
        let command = DayCommand::SetReason {
            reason: Some("   ".into()),
        };
        let record = accepted(decide_update_day(&empty_day, update(Role::Participant, command)));
        assert_eq!(record.reason, None);
    }

    #[rstest]
    #[case(
        Role::Visitor,
        DayCommand::SetMealFlag { slot: MealSlot::Meal1, phase: MealPhase::Pre, value: true }
    )]
    #[case(Role::Participant, DayCommand::SetReview { reviewed: true })]
    #[case(Role::Participant, DayCommand::GrantReward)]
    #[case(Role::Participant, DayCommand::ExecuteConsequence)]
    fn it_should_reject_edits_outside_the_role(
        empty_day: DayContext,
        #[case] role: Role,
        #[case] command: DayCommand,
    ) {
        assert_eq!(
            decide_update_day(&empty_day, update(role, command)),
            Decision::Rejected {
                reason: DecideError::Forbidden { role }
            }
        );
    }

    #[rstest]
    fn it_should_reject_every_edit_from_a_readonly_commander(empty_day: DayContext) {
        let mut command = update(Role::Commander, DayCommand::SetReview { reviewed: true });
        command.actor.readonly = true;
        assert!(matches!(
            decide_update_day(&empty_day, command),
            Decision::Rejected {
                reason: DecideError::Forbidden { .. }
            }
        ));
    }

    #[rstest]
    fn it_should_reject_a_malformed_date(empty_day: DayContext) {
        let mut command = update(Role::Commander, DayCommand::SetReview { reviewed: true });
        command.date = "2024-1-7".into();
        assert_eq!(
            decide_update_day(&empty_day, command),
            Decision::Rejected {
                reason: DecideError::MalformedDate("2024-1-7".into())
            }
        );
    }

    #[rstest]
    fn it_should_grant_a_due_reward(milestone_day: DayContext) {
        let record = accepted(decide_update_day(
            &milestone_day,
            update(Role::Commander, DayCommand::GrantReward),
        ));
        assert_eq!(record.reward_granted, Some(true));
    }

    #[rstest]
    fn it_should_leave_a_granted_reward_unchanged(mut milestone_day: DayContext) {
        milestone_day.current = Some(DayRecordBuilder::complete(DATE).reward_granted(true).build());
        let decision = decide_update_day(
            &milestone_day,
            update(Role::Commander, DayCommand::GrantReward),
        );
        assert!(matches!(decision, Decision::Unchanged { record } if record.is_reward_granted()));
    }

    #[rstest]
    #[case(6)]
    #[case(8)]
    fn it_should_reject_a_reward_off_the_milestone(
        mut milestone_day: DayContext,
        #[case] streak: u32,
    ) {
        milestone_day.streak = streak;
        assert_eq!(
            decide_update_day(&milestone_day, update(Role::Commander, DayCommand::GrantReward)),
            Decision::Rejected {
                reason: DecideError::RewardNotDue
            }
        );
    }

    #[rstest]
    fn it_should_execute_a_due_consequence(empty_day: DayContext) {
        let record = accepted(decide_update_day(
            &empty_day,
            update(Role::Commander, DayCommand::ExecuteConsequence),
        ));
        assert_eq!(record.consequence_executed, Some(true));
    }

    #[rstest]
    fn it_should_reject_a_consequence_on_a_complete_day(milestone_day: DayContext) {
        assert_eq!(
            decide_update_day(
                &milestone_day,
                update(Role::Commander, DayCommand::ExecuteConsequence)
            ),
            Decision::Rejected {
                reason: DecideError::ConsequenceNotDue
            }
        );
    }

    #[rstest]
    fn it_should_keep_one_shot_flags_when_meals_change(mut milestone_day: DayContext) {
        milestone_day.current = Some(DayRecordBuilder::complete(DATE).reward_granted(true).build());
        let command = DayCommand::SetMealFlag {
            slot: MealSlot::Meal1,
            phase: MealPhase::Post,
            value: false,
        };
        let record = accepted(decide_update_day(
            &milestone_day,
            update(Role::Participant, command),
        ));
        assert!(!record.meal1.post_reported);
        assert_eq!(record.reward_granted, Some(true));
    }

    #[rstest]
    fn it_should_take_the_streak_from_the_month_of_the_day() {
        let mut records = complete_days(2024, 1, 25..=31);
        records.extend(complete_days(2024, 2, 1..=3));
        let settings = settings_fixture();

        let january = DayContext::from_snapshot(&records, &settings, "2024-01-31");
        assert!(january.complete);
        assert_eq!(january.streak, 7);
        assert_eq!(january.reward_interval, 7);

        let february = DayContext::from_snapshot(&records, &settings, "2024-02-03");
        assert_eq!(february.streak, 3);

        let missing = DayContext::from_snapshot(&records, &settings, "2024-02-10");
        assert_eq!(missing.current, None);
        assert!(!missing.complete);
        assert_eq!(missing.streak, 0);
    }

    #[rstest]
    fn it_should_read_commands_from_tagged_json() {
        let command: DayCommand = serde_json::from_str(
            r#"{"type":"setMealFlag","slot":"meal2","phase":"post","value":true}"#,
        )
        .unwrap();
        assert_eq!(
            command,
            DayCommand::SetMealFlag {
                slot: MealSlot::Meal2,
                phase: MealPhase::Post,
                value: true
            }
        );
        let command: DayCommand = serde_json::from_str(r#"{"type":"grantReward"}"#).unwrap();
        assert_eq!(command, DayCommand::GrantReward);
    }
}
