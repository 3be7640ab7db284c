use crate::modules::meal_log::core::record::{MealEntry, MealSlot};
use crate::modules::meal_log::use_cases::month_board::handler::BoardPeriod;
use crate::modules::meal_log::use_cases::update_day::command::{DayCommand, UpdateDay};
use crate::modules::meal_log::use_cases::update_day::handler::UpdateOutcome;
use crate::modules::rooms::core::member::{Actor, Role};
use crate::shell::state::AppState;
use crate::tests::fixtures::{ROOM, actor, date, state_with_room};

fn update(date: &str, command: DayCommand, actor: &Actor) -> UpdateDay {
    UpdateDay {
        room_id: ROOM.into(),
        date: date.into(),
        command,
        actor: actor.clone(),
        at: 1_704_067_200_000,
    }
}

fn reported() -> MealEntry {
    MealEntry {
        pre_reported: true,
        post_reported: true,
        ..MealEntry::default()
    }
}

/// Participant reports both meals and the commander signs off, for every day in `days`.
async fn check_in(state: &AppState, days: std::ops::RangeInclusive<u32>) {
    let participant = actor(Role::Participant);
    let commander = actor(Role::Commander);
    let today = date(2024, 1, 10);
    for day in days {
        let key = format!("2024-01-{day:02}");
        for slot in [MealSlot::Meal1, MealSlot::Meal2] {
            let command = DayCommand::SetMeal { slot, entry: reported() };
            state
                .update_day_handler
                .handle(update(&key, command, &participant), today)
                .await
                .unwrap();
        }
        state
            .update_day_handler
            .handle(update(&key, DayCommand::SetReview { reviewed: true }, &commander), today)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn grants_the_weekly_reward_after_seven_checked_in_days() {
    let state = state_with_room().await;
    let today = date(2024, 1, 10);
    check_in(&state, 1..=7).await;

    let before = state
        .month_board_handler
        .handle(ROOM, BoardPeriod::default(), today, state.locale)
        .await
        .unwrap();
    assert!(before.day("2024-01-07").unwrap().reward_due);
    assert_eq!(before.stats.rewards_due, 1);

    let commander = actor(Role::Commander);
    let granted = state
        .update_day_handler
        .handle(update("2024-01-07", DayCommand::GrantReward, &commander), today)
        .await
        .unwrap();
    assert!(matches!(granted, UpdateOutcome::Applied { ref record } if record.is_reward_granted()));

    let again = state
        .update_day_handler
        .handle(update("2024-01-07", DayCommand::GrantReward, &commander), today)
        .await
        .unwrap();
    assert!(matches!(again, UpdateOutcome::Unchanged { .. }));

    let after = state
        .month_board_handler
        .handle(ROOM, BoardPeriod::default(), today, state.locale)
        .await
        .unwrap();
    let day7 = after.day("2024-01-07").unwrap();
    assert_eq!(day7.streak, 7);
    assert!(!day7.reward_due);
    assert_eq!(after.stats.total_complete, 7);
    assert_eq!(after.stats.longest_streak, 7);
    assert_eq!(after.stats.rewards_due, 0);
    assert_eq!(after.stats.consequences_due, 24);
}

#[tokio::test]
async fn tallies_buckets_then_clears_the_month() {
    let state = state_with_room().await;
    let today = date(2024, 1, 10);
    check_in(&state, 1..=7).await;

    // Day 8 has meals but no review, day 9 only a reason.
    let participant = actor(Role::Participant);
    state
        .update_day_handler
        .handle(
            update(
                "2024-01-08",
                DayCommand::SetMeal {
                    slot: MealSlot::Meal1,
                    entry: reported(),
                },
                &participant,
            ),
            today,
        )
        .await
        .unwrap();
    state
        .update_day_handler
        .handle(
            update(
                "2024-01-09",
                DayCommand::SetReason {
                    reason: Some("sick".into()),
                },
                &participant,
            ),
            today,
        )
        .await
        .unwrap();

    let report = state.seven_day_buckets_handler.handle(ROOM, today).await.unwrap();
    assert_eq!(report.buckets.len(), 2);
    assert_eq!(report.buckets[0].reward_count, 1);
    assert_eq!(report.buckets[0].punish_count, 0);
    assert_eq!(report.buckets[1].days.len(), 3);
    assert_eq!(report.totals.reward_count, 1);
    assert_eq!(report.totals.punish_count, 3);

    let reset = state
        .reset_period_handler
        .handle(ROOM, &actor(Role::Commander), Some(2024), Some(1), today)
        .await
        .unwrap();
    assert_eq!(reset.cleared, 9);

    let emptied = state.seven_day_buckets_handler.handle(ROOM, today).await.unwrap();
    assert!(emptied.buckets.is_empty());
}

#[tokio::test]
async fn a_visitor_cannot_touch_the_board() {
    let state = state_with_room().await;
    let result = state
        .update_day_handler
        .handle(
            update("2024-01-01", DayCommand::SetReview { reviewed: true }, &Actor::visitor()),
            date(2024, 1, 10),
        )
        .await;
    assert!(result.is_err());
    assert!(state.records.load_all(ROOM).await.unwrap().is_empty());
}
