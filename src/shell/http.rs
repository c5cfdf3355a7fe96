use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde_json::json;
use tracing::error;

use crate::modules::timesheets::use_cases::correct_punch_pair::inbound::http as correct_pair_http;
use crate::modules::timesheets::use_cases::delete_punch::inbound::http as delete_http;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::list_punches::inbound::http as list_http;
use crate::modules::timesheets::use_cases::punch_stats::inbound::http as stats_http;
use crate::modules::timesheets::use_cases::register_punch::inbound::http as register_http;
use crate::modules::timesheets::use_cases::update_punch::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/punches", post(register_http::handle))
        .route("/punches/pair-corrections", post(correct_pair_http::handle))
        .route(
            "/punches/{id}",
            patch(update_http::handle).delete(delete_http::handle),
        )
        .route("/employees/{id}/punches", get(list_http::handle))
        .route("/employees/{id}/punch-stats", get(stats_http::handle))
        .with_state(state)
}

/// 422 for a body or query string that failed to deserialize.
pub fn unprocessable(reason: impl Into<String>) -> Response {
    let reason = reason.into();
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": reason }))).into_response()
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Store(_) | Self::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.reason() }))).into_response()
    }
}
