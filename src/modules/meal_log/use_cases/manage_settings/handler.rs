// Reading and changing room settings.
//
// - Any member may read.
// - Patching settings is commander only; values are clamped, never rejected.
// - Moving the viewed month is open to anyone who may edit meals.

use crate::modules::meal_log::adapters::outbound::settings_repository::SettingsRepository;
use crate::modules::meal_log::core::permissions::{EditArea, require_edit};
use crate::modules::meal_log::core::settings::{Settings, SettingsPatch};
use crate::modules::rooms::core::member::Actor;
use crate::shared::application::errors::ApplicationError;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

pub struct ManageSettingsHandler {
    settings: Arc<SettingsRepository>,
}

impl ManageSettingsHandler {
    pub fn new(settings: Arc<SettingsRepository>) -> Self {
        Self { settings }
    }

    pub async fn get(&self, room_id: &str, today: NaiveDate) -> Result<Settings, ApplicationError> {
        Ok(self.settings.load(room_id, today).await?)
    }

    pub async fn patch(
        &self,
        room_id: &str,
        actor: &Actor,
        patch: SettingsPatch,
        today: NaiveDate,
    ) -> Result<Settings, ApplicationError> {
        require_edit(actor, EditArea::Commander, "change settings")?;
        let next = self.settings.load(room_id, today).await?.apply(patch);
        self.settings.save(room_id, &next).await?;
        info!(room_id, reward_interval = next.reward_interval, "settings updated");
        Ok(next)
    }

    pub async fn shift_month(
        &self,
        room_id: &str,
        actor: &Actor,
        delta: i32,
        today: NaiveDate,
    ) -> Result<Settings, ApplicationError> {
        require_edit(actor, EditArea::Meals, "change the viewed month")?;
        let next = self.settings.load(room_id, today).await?.shift_month(delta)?;
        self.settings.save(room_id, &next).await?;
        Ok(next)
    }
}
