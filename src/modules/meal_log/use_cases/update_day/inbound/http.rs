use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::meal_log::use_cases::update_day::command::{DayCommand, UpdateDay};
use crate::modules::meal_log::use_cases::update_day::handler::UpdateOutcome;
use crate::shared::core::clock;
use crate::shell::http::{error_response, is_readonly, member_uid};
use crate::shell::state::AppState;

/// `SyncFailed` answers 503 with both record versions so the client can roll
/// its own view back.
pub async fn handle(
    State(state): State<AppState>,
    Path((room_id, date)): Path<(String, String)>,
    headers: HeaderMap,
    body: Result<Json<DayCommand>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let actor = match state
        .resolve_actor(&room_id, member_uid(&headers), is_readonly(&headers))
        .await
    {
        Ok(actor) => actor,
        Err(error) => return error_response(error),
    };

    let update = UpdateDay {
        room_id,
        date,
        command,
        actor,
        at: clock::now_millis(),
    };

    match state.update_day_handler.handle(update, clock::today()).await {
        Ok(outcome @ UpdateOutcome::SyncFailed { .. }) => {
            (StatusCode::SERVICE_UNAVAILABLE, Json(outcome)).into_response()
        }
        Ok(outcome) => Json(outcome).into_response(),
        Err(error) => error_response(error),
    }
}
