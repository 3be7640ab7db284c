use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::meal_log::use_cases::month_board::handler::BoardPeriod;
use crate::modules::meal_log::use_cases::month_board::projection::{BoardStats, DayView, MonthBoard};
use crate::shared::core::clock;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDayView {
    pub date: String,
    pub weekday: String,
    pub complete: bool,
    pub streak: u32,
    pub reward_due: bool,
    pub consequence_due: bool,
    pub is_today: bool,
    pub commander_reviewed: bool,
    pub reward_granted: bool,
    pub consequence_executed: bool,
    pub reason: Option<String>,
}

impl From<DayView> for GqlDayView {
    fn from(v: DayView) -> Self {
        let record = v.record.unwrap_or_default();
        Self {
            date: v.date,
            weekday: v.weekday,
            complete: v.complete,
            streak: v.streak,
            reward_due: v.reward_due,
            consequence_due: v.consequence_due,
            is_today: v.is_today,
            commander_reviewed: record.commander_reviewed,
            reward_granted: record.is_reward_granted(),
            consequence_executed: record.is_consequence_executed(),
            reason: record.reason,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBoardStats {
    pub total_complete: u32,
    pub longest_streak: u32,
    pub rewards_due: u32,
    pub consequences_due: u32,
}

impl From<BoardStats> for GqlBoardStats {
    fn from(v: BoardStats) -> Self {
        Self {
            total_complete: v.total_complete,
            longest_streak: v.longest_streak,
            rewards_due: v.rewards_due,
            consequences_due: v.consequences_due,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMonthBoard {
    pub year: i32,
    pub month: u32,
    pub reward_interval: u32,
    pub require_commander_review: bool,
    pub major_reward_label: String,
    pub consequence_label: String,
    pub days: Vec<GqlDayView>,
    pub weeks: Vec<Vec<String>>,
    pub stats: GqlBoardStats,
}

impl From<MonthBoard> for GqlMonthBoard {
    fn from(v: MonthBoard) -> Self {
        Self {
            year: v.year,
            month: v.month,
            reward_interval: v.settings.reward_interval,
            require_commander_review: v.settings.require_commander_review,
            major_reward_label: v.settings.major_reward_label,
            consequence_label: v.settings.consequence_label,
            days: v.days.into_iter().map(Into::into).collect(),
            weeks: v.weeks,
            stats: v.stats.into(),
        }
    }
}

#[derive(Default)]
pub struct MonthBoardQuery;

#[Object]
impl MonthBoardQuery {
    async fn month_board(
        &self,
        context: &Context<'_>,
        room_id: String,
        year: Option<i32>,
        month: Option<i64>,
    ) -> GqlResult<GqlMonthBoard> {
        let state = context.data_unchecked::<AppState>();
        state.require_room(&room_id).await?;
        let board = state
            .month_board_handler
            .handle(&room_id, BoardPeriod { year, month }, clock::today(), state.locale)
            .await?;
        Ok(board.into())
    }
}
