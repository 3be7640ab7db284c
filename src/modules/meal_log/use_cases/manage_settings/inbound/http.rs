use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::meal_log::core::settings::SettingsPatch;
use crate::shared::core::clock;
use crate::shell::http::{error_response, is_readonly, member_uid};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ShiftMonthBody {
    pub delta: i32,
}

pub async fn get_settings(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    if let Err(error) = state.require_room(&room_id).await {
        return error_response(error);
    }
    match state.settings_handler.get(&room_id, clock::today()).await {
        Ok(settings) => Json(settings).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn patch_settings(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<SettingsPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
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
        .settings_handler
        .patch(&room_id, &actor, patch, clock::today())
        .await
    {
        Ok(settings) => Json(settings).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn shift_month(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<ShiftMonthBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
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
        .settings_handler
        .shift_month(&room_id, &actor, body.delta, clock::today())
        .await
    {
        Ok(settings) => Json(settings).into_response(),
        Err(error) => error_response(error),
    }
}
