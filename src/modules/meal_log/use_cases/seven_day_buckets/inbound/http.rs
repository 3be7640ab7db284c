use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::core::clock;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    if let Err(error) = state.require_room(&room_id).await {
        return error_response(error);
    }
    match state
        .seven_day_buckets_handler
        .handle(&room_id, clock::today())
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(error) => error_response(error),
    }
}
