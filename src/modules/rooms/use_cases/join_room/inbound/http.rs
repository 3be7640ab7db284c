use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::rooms::core::member::Role;
use crate::modules::rooms::use_cases::join_room::command::JoinRoom;
use crate::shared::core::clock;
use crate::shell::http::{error_response, member_uid};
use crate::shell::state::AppState;

fn default_role() -> Role {
    Role::Participant
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomBody {
    pub join_code: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomResponse {
    pub room_id: String,
    pub uid: String,
    pub role: Role,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<JoinRoomBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = JoinRoom {
        room_id: room_id.clone(),
        uid: member_uid(&headers)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::now_v7().to_string()),
        join_code: body.join_code,
        role: body.role,
        joined_at: clock::now_millis(),
    };

    match state.join_room_handler.handle(command).await {
        Ok(member) => Json(JoinRoomResponse {
            room_id,
            uid: member.uid,
            role: member.role,
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}
