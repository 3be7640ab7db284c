use crate::modules::meal_log::adapters::outbound::record_repository::DayRecordRepository;
use crate::modules::meal_log::adapters::outbound::settings_repository::SettingsRepository;
use crate::modules::meal_log::core::calendar::WeekdayLocale;
use crate::modules::meal_log::core::settings::SettingsPatch;
use crate::modules::meal_log::use_cases::month_board::projection::MonthBoard;
use crate::shared::application::errors::ApplicationError;
use chrono::NaiveDate;
use std::sync::Arc;

/// Month to show. Missing fields fall back to the room's viewed period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardPeriod {
    pub year: Option<i32>,
    pub month: Option<i64>,
}

pub struct MonthBoardHandler {
    records: Arc<DayRecordRepository>,
    settings: Arc<SettingsRepository>,
}

impl MonthBoardHandler {
    pub fn new(records: Arc<DayRecordRepository>, settings: Arc<SettingsRepository>) -> Self {
        Self { records, settings }
    }

    pub async fn handle(
        &self,
        room_id: &str,
        period: BoardPeriod,
        today: NaiveDate,
        locale: WeekdayLocale,
    ) -> Result<MonthBoard, ApplicationError> {
        let settings = self.settings.load(room_id, today).await?.apply(SettingsPatch {
            year: period.year,
            month: period.month,
            ..SettingsPatch::default()
        });
        let records = self.records.load_all(room_id).await?;
        Ok(MonthBoard::build(&records, &settings, today, locale))
    }
}
