// A room pairs devices: it owns one record map, one settings document and its
// members. Participants join with a six digit code.

use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const JOIN_CODE_LEN: usize = 6;
const ROOM_ID_MIN_LEN: usize = 3;
const ROOM_ID_MAX_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMeta {
    pub room_id: String,
    pub open_join: bool,
    pub join_code: String,
    pub created_at: EpochMillis,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("room '{0}' does not exist")]
    NotFound(String),

    #[error("room '{0}' already exists")]
    AlreadyExists(String),

    #[error("invalid room id '{0}': use 3-32 lowercase letters, digits, '-' or '_'")]
    InvalidRoomId(String),

    #[error("wrong join code or the room is closed for joining")]
    JoinRejected,

    #[error("visitors cannot join a room")]
    VisitorJoin,
}

pub fn validate_room_id(room_id: &str) -> Result<(), RoomError> {
    let valid_len = (ROOM_ID_MIN_LEN..=ROOM_ID_MAX_LEN).contains(&room_id.len());
    let valid_chars = room_id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid_len && valid_chars {
        Ok(())
    } else {
        Err(RoomError::InvalidRoomId(room_id.to_string()))
    }
}

/// Random code in 100000..=999999.
pub fn generate_join_code() -> String {
    let value = 100_000 + (Uuid::new_v4().as_u128() % 900_000);
    value.to_string()
}

impl From<RoomError> for ApplicationError {
    fn from(error: RoomError) -> Self {
        match error {
            RoomError::NotFound(_) => ApplicationError::NotFound(error.to_string()),
            RoomError::JoinRejected | RoomError::VisitorJoin => {
                ApplicationError::Forbidden(error.to_string())
            }
            RoomError::AlreadyExists(_) | RoomError::InvalidRoomId(_) => {
                ApplicationError::Domain(error.to_string())
            }
        }
    }
}

impl RoomMeta {
    pub fn accepts(&self, join_code: &str) -> bool {
        self.open_join && self.join_code == join_code.trim()
    }
}
