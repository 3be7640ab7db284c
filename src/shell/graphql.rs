use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::modules::meal_log::use_cases::month_board::inbound::graphql::MonthBoardQuery;
use crate::modules::meal_log::use_cases::seven_day_buckets::inbound::graphql::SevenDayBucketsQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MonthBoardQuery, SevenDayBucketsQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}
