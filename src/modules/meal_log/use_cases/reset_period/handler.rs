// Bulk reset: removes every record of one month. Commander only.
//
// With a mirror configured the month is cleared there first. A failed mirror
// call leaves the local records untouched.

use crate::modules::meal_log::adapters::outbound::record_repository::DayRecordRepository;
use crate::modules::meal_log::adapters::outbound::settings_repository::SettingsRepository;
use crate::modules::meal_log::core::permissions::{EditArea, require_edit};
use crate::modules::meal_log::core::settings::SettingsPatch;
use crate::modules::rooms::core::member::Actor;
use crate::shared::application::errors::ApplicationError;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetReport {
    pub year: i32,
    pub month: u32,
    pub cleared: usize,
}

pub struct ResetPeriodHandler {
    records: Arc<DayRecordRepository>,
    settings: Arc<SettingsRepository>,
    mirror: Option<Arc<DayRecordRepository>>,
}

impl ResetPeriodHandler {
    pub fn new(
        records: Arc<DayRecordRepository>,
        settings: Arc<SettingsRepository>,
        mirror: Option<Arc<DayRecordRepository>>,
    ) -> Self {
        Self {
            records,
            settings,
            mirror,
        }
    }

    /// Clears `year`/`month`, defaulting to the room's viewed period.
    pub async fn handle(
        &self,
        room_id: &str,
        actor: &Actor,
        year: Option<i32>,
        month: Option<i64>,
        today: NaiveDate,
    ) -> Result<ResetReport, ApplicationError> {
        require_edit(actor, EditArea::Commander, "reset a month")?;
        let period = self.settings.load(room_id, today).await?.apply(SettingsPatch {
            year,
            month,
            ..SettingsPatch::default()
        });
        let prefix = period.period_prefix();
        if let Some(mirror) = &self.mirror {
            mirror.clear_prefix(room_id, &prefix).await?;
        }
        let cleared = self.records.clear_prefix(room_id, &prefix).await?;
        info!(room_id, year = period.year, month = period.month, cleared, "month reset");
        Ok(ResetReport {
            year: period.year,
            month: period.month,
            cleared,
        })
    }
}
