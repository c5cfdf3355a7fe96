use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::timesheets::core::punch::PunchStatus;
use crate::modules::timesheets::use_cases::update_punch::command::UpdatePunch;
use crate::shell::actor::AuthenticatedActor;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePunchBody {
    pub timestamp: Option<i64>,
    pub status: Option<PunchStatus>,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(punch_id): Path<String>,
    body: Result<Json<UpdatePunchBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let command = UpdatePunch {
        punch_id,
        timestamp: body.timestamp,
        status: body.status,
    };
    match state.update_punch.handle(&actor, command).await {
        Ok(punch) => (StatusCode::OK, Json(punch)).into_response(),
        Err(error) => error.into_response(),
    }
}
