use crate::modules::rooms::adapters::outbound::room_repository::RoomRepository;
use crate::modules::rooms::core::member::Member;
use crate::modules::rooms::use_cases::join_room::command::JoinRoom;
use crate::modules::rooms::use_cases::join_room::decide::decide_join_room;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct JoinRoomHandler {
    rooms: Arc<RoomRepository>,
}

impl JoinRoomHandler {
    pub fn new(rooms: Arc<RoomRepository>) -> Self {
        Self { rooms }
    }

    pub async fn handle(&self, command: JoinRoom) -> Result<Member, ApplicationError> {
        let room_id = command.room_id.clone();
        let meta = self.rooms.get_meta(&room_id).await?;
        let member = decide_join_room(meta.as_ref(), command)?;
        self.rooms.put_member(&room_id, &member).await?;
        info!(room_id = %room_id, uid = %member.uid, role = %member.role, "member joined");
        Ok(member)
    }
}
