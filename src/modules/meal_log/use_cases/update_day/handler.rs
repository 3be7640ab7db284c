// Applies one day command: load a snapshot, decide, write locally, then sync the
// mirror when one is configured.
//
// Sync
// - The local write happens first so the change shows up immediately.
// - A failed mirror write restores the previous local record and reports
//   `SyncFailed`; the caller gets both versions back.

use crate::modules::meal_log::adapters::outbound::record_repository::DayRecordRepository;
use crate::modules::meal_log::adapters::outbound::settings_repository::SettingsRepository;
use crate::modules::meal_log::core::record::DayRecord;
use crate::modules::meal_log::use_cases::update_day::command::UpdateDay;
use crate::modules::meal_log::use_cases::update_day::decide::{DayContext, decide_update_day};
use crate::modules::meal_log::use_cases::update_day::decision::{DecideError, Decision};
use crate::shared::application::errors::ApplicationError;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UpdateOutcome {
    Applied {
        record: DayRecord,
    },
    Unchanged {
        record: DayRecord,
    },
    SyncFailed {
        previous: Option<DayRecord>,
        attempted: DayRecord,
        reason: String,
    },
}

pub struct UpdateDayHandler {
    records: Arc<DayRecordRepository>,
    settings: Arc<SettingsRepository>,
    mirror: Option<Arc<DayRecordRepository>>,
}

impl UpdateDayHandler {
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

    pub async fn handle(
        &self,
        update: UpdateDay,
        today: NaiveDate,
    ) -> Result<UpdateOutcome, ApplicationError> {
        let room_id = update.room_id.clone();
        let date = update.date.clone();
        let records = self.records.load_all(&room_id).await?;
        let settings = self.settings.load(&room_id, today).await?;
        let context = DayContext::from_snapshot(&records, &settings, &date);
        let previous = context.current.clone();

        let record = match decide_update_day(&context, update) {
            Decision::Accepted { record } => record,
            Decision::Unchanged { record } => {
                debug!(room_id = %room_id, date = %date, "day already in the requested state");
                return Ok(UpdateOutcome::Unchanged { record });
            }
            Decision::Rejected { reason } => return Err(rejection(reason)),
        };

        self.records.put(&room_id, &date, &record).await?;

        if let Some(mirror) = &self.mirror {
            if let Err(error) = mirror.put(&room_id, &date, &record).await {
                warn!(
                    room_id = %room_id,
                    date = %date,
                    %error,
                    "mirror write failed, rolling back"
                );
                self.records.restore(&room_id, &date, previous.as_ref()).await?;
                return Ok(UpdateOutcome::SyncFailed {
                    previous,
                    attempted: record,
                    reason: error.to_string(),
                });
            }
        }

        info!(room_id = %room_id, date = %date, "day updated");
        Ok(UpdateOutcome::Applied { record })
    }
}

fn rejection(reason: DecideError) -> ApplicationError {
    match reason {
        DecideError::Forbidden { .. } => ApplicationError::Forbidden(reason.to_string()),
        _ => ApplicationError::Domain(reason.to_string()),
    }
}
