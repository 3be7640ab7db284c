// Command data type for joining a room as participant or commander.

use crate::modules::rooms::core::member::Role;
use crate::shared::core::primitives::EpochMillis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRoom {
    pub room_id: String,
    pub uid: String,
    pub join_code: String,
    pub role: Role,
    pub joined_at: EpochMillis,
}
