// Command data type for creating a room.
//
// The creator becomes the room's commander. Transport details (how the uid and
// the code were obtained) stay in the inbound adapter.

use crate::shared::core::primitives::EpochMillis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoom {
    pub room_id: String,
    pub commander_uid: String,
    pub join_code: String,
    pub created_at: EpochMillis,
}
