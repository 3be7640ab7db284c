use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::modules::meal_log::use_cases::transfer_snapshot::snapshot::SnapshotImport;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::clock;
use crate::shell::http::{error_response, is_readonly, member_uid};
use crate::shell::state::AppState;

/// Pretty-printed snapshot served as a file download.
pub async fn export(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    if let Err(error) = state.require_room(&room_id).await {
        return error_response(error);
    }
    let snapshot = match state.snapshot_handler.export(&room_id, clock::today()).await {
        Ok(snapshot) => snapshot,
        Err(error) => return error_response(error),
    };
    match snapshot.to_pretty_json() {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"meal-checkins-{room_id}.json\""),
                ),
            ],
            body,
        )
            .into_response(),
        Err(error) => error_response(ApplicationError::Store(error.into())),
    }
}

pub async fn import(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<SnapshotImport>, JsonRejection>,
) -> impl IntoResponse {
    let Json(import) = match body {
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
    match state
        .snapshot_handler
        .import(&room_id, &actor, import, clock::today())
        .await
    {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(error) => error_response(error),
    }
}
