// Pure decision function for joining a room.
//
// - The room must exist and be open, and the join code must match.
// - Participants and commanders may join; visitors never need to.

use crate::modules::rooms::core::member::{Member, Role};
use crate::modules::rooms::core::room::{RoomError, RoomMeta};
use crate::modules::rooms::use_cases::join_room::command::JoinRoom;

pub fn decide_join_room(meta: Option<&RoomMeta>, command: JoinRoom) -> Result<Member, RoomError> {
    let Some(meta) = meta else {
        return Err(RoomError::NotFound(command.room_id));
    };
    if command.role == Role::Visitor {
        return Err(RoomError::VisitorJoin);
    }
    if !meta.accepts(&command.join_code) {
        return Err(RoomError::JoinRejected);
    }
    Ok(Member {
        uid: command.uid,
        role: command.role,
        created_at: command.joined_at,
    })
}
