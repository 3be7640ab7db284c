use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::meal_log::core::buckets::WeeklyBucket;
use crate::modules::meal_log::use_cases::seven_day_buckets::handler::BucketsReport;
use crate::shared::core::clock;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlWeeklyBucket {
    pub start: String,
    pub end: String,
    pub days: Vec<String>,
    pub reward_count: u32,
    pub punish_count: u32,
}

impl From<WeeklyBucket> for GqlWeeklyBucket {
    fn from(v: WeeklyBucket) -> Self {
        Self {
            start: v.start,
            end: v.end,
            days: v.days,
            reward_count: v.reward_count,
            punish_count: v.punish_count,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBucketsReport {
    pub evaluated_on: String,
    pub buckets: Vec<GqlWeeklyBucket>,
    pub total_rewards: u32,
    pub total_punishments: u32,
    pub latest: Option<GqlWeeklyBucket>,
}

impl From<BucketsReport> for GqlBucketsReport {
    fn from(v: BucketsReport) -> Self {
        Self {
            evaluated_on: v.evaluated_on,
            buckets: v.buckets.into_iter().map(Into::into).collect(),
            total_rewards: v.totals.reward_count,
            total_punishments: v.totals.punish_count,
            latest: v.latest.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct SevenDayBucketsQuery;

#[Object]
impl SevenDayBucketsQuery {
    async fn seven_day_buckets(
        &self,
        context: &Context<'_>,
        room_id: String,
    ) -> GqlResult<GqlBucketsReport> {
        let state = context.data_unchecked::<AppState>();
        state.require_room(&room_id).await?;
        let report = state
            .seven_day_buckets_handler
            .handle(&room_id, clock::today())
            .await?;
        Ok(report.into())
    }
}
