use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::timesheets::use_cases::list_punches::query::ListPunches;
use crate::shell::actor::AuthenticatedActor;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListPunchesParams {
    pub from: Option<i64>,
    pub to: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(employee_id): Path<String>,
    params: Result<Query<ListPunchesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let query = ListPunches {
        employee_id,
        from: params.from,
        to: params.to,
    };
    match state.list_punches.handle(&actor, query).await {
        Ok(punches) => Json(punches).into_response(),
        Err(error) => error.into_response(),
    }
}
