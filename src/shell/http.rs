use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::error;

use crate::modules::meal_log::use_cases::manage_settings::inbound::http as settings_http;
use crate::modules::meal_log::use_cases::month_board::inbound::http as board_http;
use crate::modules::meal_log::use_cases::reset_period::inbound::http as reset_http;
use crate::modules::meal_log::use_cases::seven_day_buckets::inbound::http as buckets_http;
use crate::modules::meal_log::use_cases::transfer_snapshot::inbound::http as snapshot_http;
use crate::modules::meal_log::use_cases::update_day::inbound::http as update_day_http;
use crate::modules::rooms::use_cases::create_room::inbound::http as create_room_http;
use crate::modules::rooms::use_cases::join_room::inbound::http as join_room_http;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub const MEMBER_UID_HEADER: &str = "x-member-uid";
pub const READONLY_HEADER: &str = "x-readonly";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rooms", post(create_room_http::handle))
        .route("/rooms/{room_id}/join", post(join_room_http::handle))
        .route("/rooms/{room_id}/board", get(board_http::handle))
        .route("/rooms/{room_id}/buckets", get(buckets_http::handle))
        .route("/rooms/{room_id}/days/{date}", post(update_day_http::handle))
        .route("/rooms/{room_id}/reset", post(reset_http::handle))
        .route(
            "/rooms/{room_id}/settings",
            get(settings_http::get_settings).patch(settings_http::patch_settings),
        )
        .route("/rooms/{room_id}/settings/shift", post(settings_http::shift_month))
        .route("/rooms/{room_id}/export", get(snapshot_http::export))
        .route("/rooms/{room_id}/import", post(snapshot_http::import))
        .with_state(state)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
    };
    if status.is_server_error() {
        error!(%error, "request failed");
    }
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub fn member_uid(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(MEMBER_UID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|uid| !uid.is_empty())
}

pub fn is_readonly(headers: &HeaderMap) -> bool {
    headers
        .get(READONLY_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

#[cfg(test)]
mod shell_http_tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    #[rstest]
    #[case(ApplicationError::Forbidden("no".into()), StatusCode::FORBIDDEN)]
    #[case(ApplicationError::NotFound("room".into()), StatusCode::NOT_FOUND)]
    #[case(ApplicationError::Domain("not due".into()), StatusCode::CONFLICT)]
    fn it_should_map_errors_to_status_codes(
        #[case] error: ApplicationError,
        #[case] status: StatusCode,
    ) {
        assert_eq!(error_response(error).status(), status);
    }

    #[rstest]
    fn it_should_read_the_caller_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(member_uid(&headers), None);
        assert!(!is_readonly(&headers));

        headers.insert(MEMBER_UID_HEADER, HeaderValue::from_static(" u-1 "));
        headers.insert(READONLY_HEADER, HeaderValue::from_static("true"));
        assert_eq!(member_uid(&headers), Some("u-1"));
        assert!(is_readonly(&headers));
    }
}
