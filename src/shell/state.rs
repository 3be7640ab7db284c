use crate::modules::meal_log::adapters::outbound::record_repository::DayRecordRepository;
use crate::modules::meal_log::adapters::outbound::settings_repository::SettingsRepository;
use crate::modules::meal_log::core::calendar::WeekdayLocale;
use crate::modules::meal_log::use_cases::manage_settings::handler::ManageSettingsHandler;
use crate::modules::meal_log::use_cases::month_board::handler::MonthBoardHandler;
use crate::modules::meal_log::use_cases::reset_period::handler::ResetPeriodHandler;
use crate::modules::meal_log::use_cases::seven_day_buckets::handler::SevenDayBucketsHandler;
use crate::modules::meal_log::use_cases::transfer_snapshot::handler::TransferSnapshotHandler;
use crate::modules::meal_log::use_cases::update_day::handler::UpdateDayHandler;
use crate::modules::rooms::adapters::outbound::room_repository::RoomRepository;
use crate::modules::rooms::core::member::Actor;
use crate::modules::rooms::core::room::{RoomError, RoomMeta};
use crate::modules::rooms::use_cases::create_room::handler::CreateRoomHandler;
use crate::modules::rooms::use_cases::join_room::handler::JoinRoomHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<RoomRepository>,
    pub records: Arc<DayRecordRepository>,
    pub create_room_handler: Arc<CreateRoomHandler>,
    pub join_room_handler: Arc<JoinRoomHandler>,
    pub update_day_handler: Arc<UpdateDayHandler>,
    pub reset_period_handler: Arc<ResetPeriodHandler>,
    pub month_board_handler: Arc<MonthBoardHandler>,
    pub seven_day_buckets_handler: Arc<SevenDayBucketsHandler>,
    pub settings_handler: Arc<ManageSettingsHandler>,
    pub snapshot_handler: Arc<TransferSnapshotHandler>,
    pub locale: WeekdayLocale,
}

impl AppState {
    /// Wires every handler onto `store`. Day edits, resets and imported records
    /// are also written to `mirror` when one is given.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        mirror: Option<Arc<dyn DocumentStore>>,
        locale: WeekdayLocale,
    ) -> Self {
        let rooms = Arc::new(RoomRepository::new(store.clone()));
        let records = Arc::new(DayRecordRepository::new(store.clone()));
        let settings = Arc::new(SettingsRepository::new(store));
        let mirror_records = mirror.map(|mirror| Arc::new(DayRecordRepository::new(mirror)));

        Self {
            create_room_handler: Arc::new(CreateRoomHandler::new(rooms.clone())),
            join_room_handler: Arc::new(JoinRoomHandler::new(rooms.clone())),
            update_day_handler: Arc::new(UpdateDayHandler::new(
                records.clone(),
                settings.clone(),
                mirror_records.clone(),
            )),
            reset_period_handler: Arc::new(ResetPeriodHandler::new(
                records.clone(),
                settings.clone(),
                mirror_records.clone(),
            )),
            month_board_handler: Arc::new(MonthBoardHandler::new(
                records.clone(),
                settings.clone(),
            )),
            seven_day_buckets_handler: Arc::new(SevenDayBucketsHandler::new(
                records.clone(),
                settings.clone(),
            )),
            settings_handler: Arc::new(ManageSettingsHandler::new(settings.clone())),
            snapshot_handler: Arc::new(TransferSnapshotHandler::new(
                records.clone(),
                settings,
                mirror_records,
            )),
            records,
            rooms,
            locale,
        }
    }

    pub async fn require_room(&self, room_id: &str) -> Result<RoomMeta, ApplicationError> {
        self.rooms
            .get_meta(room_id)
            .await?
            .ok_or_else(|| RoomError::NotFound(room_id.to_string()).into())
    }

    /// The caller's identity inside an existing room. Unknown uids act as visitors.
    pub async fn resolve_actor(
        &self,
        room_id: &str,
        uid: Option<&str>,
        readonly: bool,
    ) -> Result<Actor, ApplicationError> {
        self.require_room(room_id).await?;
        Ok(self.rooms.resolve_actor(room_id, uid, readonly).await?)
    }
}
