use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::meal_log::use_cases::month_board::handler::BoardPeriod;
use crate::shared::core::clock;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthBoardParams {
    pub year: Option<i32>,
    pub month: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Query(params): Query<MonthBoardParams>,
) -> impl IntoResponse {
    if let Err(error) = state.require_room(&room_id).await {
        return error_response(error);
    }
    let period = BoardPeriod {
        year: params.year,
        month: params.month,
    };
    match state
        .month_board_handler
        .handle(&room_id, period, clock::today(), state.locale)
        .await
    {
        Ok(board) => Json(board).into_response(),
        Err(error) => error_response(error),
    }
}
