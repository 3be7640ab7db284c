// Seven-day buckets over the whole history of a room, evaluated on `today`.

use crate::modules::meal_log::adapters::outbound::record_repository::DayRecordRepository;
use crate::modules::meal_log::adapters::outbound::settings_repository::SettingsRepository;
use crate::modules::meal_log::core::buckets::{
    BucketTotals, WeeklyBucket, bucket_totals, seven_day_buckets,
};
use crate::modules::meal_log::core::completion::completion_for;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{DayKey, format_day_key};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketsReport {
    /// The day the buckets run up to.
    pub evaluated_on: DayKey,
    pub buckets: Vec<WeeklyBucket>,
    pub totals: BucketTotals,
    /// The bucket holding `evaluated_on`, possibly still short.
    pub latest: Option<WeeklyBucket>,
}

pub struct SevenDayBucketsHandler {
    records: Arc<DayRecordRepository>,
    settings: Arc<SettingsRepository>,
}

impl SevenDayBucketsHandler {
    pub fn new(records: Arc<DayRecordRepository>, settings: Arc<SettingsRepository>) -> Self {
        Self { records, settings }
    }

    pub async fn handle(
        &self,
        room_id: &str,
        today: NaiveDate,
    ) -> Result<BucketsReport, ApplicationError> {
        let records = self.records.load_all(room_id).await?;
        let settings = self.settings.load(room_id, today).await?;
        let buckets = seven_day_buckets(&records, completion_for(&records, &settings), today);
        Ok(BucketsReport {
            evaluated_on: format_day_key(today),
            totals: bucket_totals(&buckets),
            latest: buckets.last().cloned(),
            buckets,
        })
    }
}
