use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::rooms::core::member::Role;
use crate::modules::rooms::core::room::generate_join_code;
use crate::modules::rooms::use_cases::create_room::command::CreateRoom;
use crate::shared::core::clock;
use crate::shell::http::{error_response, member_uid};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomBody {
    pub room_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
    pub join_code: String,
    pub uid: String,
    pub role: Role,
}

/// The body is optional; without a `roomId` a fresh id is generated. The caller's
/// `x-member-uid` becomes the commander, or a new uid is issued.
pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = if body.is_empty() {
        CreateRoomBody::default()
    } else {
        match serde_json::from_slice::<CreateRoomBody>(&body) {
            Ok(body) => body,
            Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        }
    };

    let command = CreateRoom {
        room_id: body
            .room_id
            .unwrap_or_else(|| Uuid::now_v7().simple().to_string()),
        commander_uid: member_uid(&headers)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::now_v7().to_string()),
        join_code: generate_join_code(),
        created_at: clock::now_millis(),
    };

    match state.create_room_handler.handle(command).await {
        Ok((meta, commander)) => (
            StatusCode::CREATED,
            Json(CreateRoomResponse {
                room_id: meta.room_id,
                join_code: meta.join_code,
                uid: commander.uid,
                role: commander.role,
            }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
