// Room creation handler: load, decide, persist the room and its commander.
//
// The room document is written create-if-absent, so of two concurrent
// creations for one id only the first stores anything.

use crate::modules::rooms::adapters::outbound::room_repository::RoomRepository;
use crate::modules::rooms::core::member::Member;
use crate::modules::rooms::core::room::{RoomError, RoomMeta};
use crate::modules::rooms::use_cases::create_room::command::CreateRoom;
use crate::modules::rooms::use_cases::create_room::decide::decide_create_room;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct CreateRoomHandler {
    rooms: Arc<RoomRepository>,
}

impl CreateRoomHandler {
    pub fn new(rooms: Arc<RoomRepository>) -> Self {
        Self { rooms }
    }

    pub async fn handle(
        &self,
        command: CreateRoom,
    ) -> Result<(RoomMeta, Member), ApplicationError> {
        let existing = self.rooms.get_meta(&command.room_id).await?;
        let (meta, commander) = decide_create_room(existing.as_ref(), command)?;
        if !self.rooms.create_meta(&meta).await? {
            return Err(RoomError::AlreadyExists(meta.room_id).into());
        }
        self.rooms.put_member(&meta.room_id, &commander).await?;
        info!(room_id = %meta.room_id, uid = %commander.uid, "room created");
        Ok((meta, commander))
    }
}
