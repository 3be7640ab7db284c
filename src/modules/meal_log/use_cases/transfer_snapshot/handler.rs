// Snapshot export and import.
//
// Imported records reach the mirror, when one is configured, before the local
// store. A failed mirror call leaves the local records untouched.

use crate::modules::meal_log::adapters::outbound::record_repository::DayRecordRepository;
use crate::modules::meal_log::adapters::outbound::settings_repository::SettingsRepository;
use crate::modules::meal_log::core::permissions::{EditArea, require_edit};
use crate::modules::meal_log::use_cases::transfer_snapshot::snapshot::{Snapshot, SnapshotImport};
use crate::modules::rooms::core::member::Actor;
use crate::shared::application::errors::ApplicationError;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

pub struct TransferSnapshotHandler {
    records: Arc<DayRecordRepository>,
    settings: Arc<SettingsRepository>,
    mirror: Option<Arc<DayRecordRepository>>,
}

impl TransferSnapshotHandler {
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

    pub async fn export(
        &self,
        room_id: &str,
        today: NaiveDate,
    ) -> Result<Snapshot, ApplicationError> {
        Ok(Snapshot {
            settings: self.settings.load(room_id, today).await?,
            records: self.records.load_all(room_id).await?,
        })
    }

    /// Commander only. Returns the room as it stands after the import.
    pub async fn import(
        &self,
        room_id: &str,
        actor: &Actor,
        import: SnapshotImport,
        today: NaiveDate,
    ) -> Result<Snapshot, ApplicationError> {
        require_edit(actor, EditArea::Commander, "import data")?;
        if let (Some(mirror), Some(records)) = (&self.mirror, &import.records) {
            mirror.replace_all(room_id, records).await?;
        }
        if let Some(patch) = import.settings {
            let next = self.settings.load(room_id, today).await?.apply(patch);
            self.settings.save(room_id, &next).await?;
        }
        if let Some(records) = &import.records {
            self.records.replace_all(room_id, records).await?;
            info!(room_id, days = records.len(), "records imported");
        }
        self.export(room_id, today).await
    }
}
