use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;

use crate::modules::timesheets::core::punch::PunchStatus;
use crate::modules::timesheets::use_cases::register_punch::command::RegisterPunch;
use crate::shell::actor::AuthenticatedActor;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterPunchBody {
    pub employee_id: Option<String>,
    pub timestamp: Option<i64>,
    pub status: Option<PunchStatus>,
}

impl From<RegisterPunchBody> for RegisterPunch {
    fn from(body: RegisterPunchBody) -> Self {
        Self {
            employee_id: body.employee_id,
            timestamp: body.timestamp,
            status: body.status,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    body: Result<Json<RegisterPunchBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    match state.register_punch.handle(&actor, body.into()).await {
        Ok(punch) => (StatusCode::CREATED, Json(punch)).into_response(),
        Err(error) => error.into_response(),
    }
}
