// Pure decision function for room creation.
//
// - The room id must be valid and not taken.
// - On success the room opens for joining and the creator is its commander.

use crate::modules::rooms::core::member::{Member, Role};
use crate::modules::rooms::core::room::{RoomError, RoomMeta, validate_room_id};
use crate::modules::rooms::use_cases::create_room::command::CreateRoom;

pub fn decide_create_room(
    existing: Option<&RoomMeta>,
    command: CreateRoom,
) -> Result<(RoomMeta, Member), RoomError> {
    validate_room_id(&command.room_id)?;
    if existing.is_some() {
        return Err(RoomError::AlreadyExists(command.room_id));
    }
    let meta = RoomMeta {
        room_id: command.room_id,
        open_join: true,
        join_code: command.join_code,
        created_at: command.created_at,
    };
    let commander = Member {
        uid: command.commander_uid,
        role: Role::Commander,
        created_at: command.created_at,
    };
    Ok((meta, commander))
}
