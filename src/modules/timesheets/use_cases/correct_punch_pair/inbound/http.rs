use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::timesheets::use_cases::correct_punch_pair::command::CorrectPunchPair;
use crate::shell::actor::AuthenticatedActor;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    body: Result<Json<CorrectPunchPair>, JsonRejection>,
) -> Response {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    match state.correct_punch_pair.handle(&actor, command).await {
        Ok(pair) => (StatusCode::OK, Json(pair)).into_response(),
        Err(error) => error.into_response(),
    }
}
