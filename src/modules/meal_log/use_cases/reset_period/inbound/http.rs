use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::clock;
use crate::shell::http::{error_response, is_readonly, member_uid};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ResetPeriodBody {
    pub year: Option<i32>,
    pub month: Option<i64>,
}

/// An empty body resets the room's viewed month.
pub async fn handle(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = if body.is_empty() {
        ResetPeriodBody::default()
    } else {
        match serde_json::from_slice::<ResetPeriodBody>(&body) {
            Ok(body) => body,
            Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        }
    };

    let actor = match state
        .resolve_actor(&room_id, member_uid(&headers), is_readonly(&headers))
        .await
    {
        Ok(actor) => actor,
        Err(error) => return error_response(error),
    };

    match state
        .reset_period_handler
        .handle(&room_id, &actor, body.year, body.month, clock::today())
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(error) => error_response(error),
    }
}
