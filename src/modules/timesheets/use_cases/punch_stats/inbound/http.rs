use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::timesheets::use_cases::punch_stats::query::PunchStatsQuery;
use crate::shell::actor::AuthenticatedActor;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PunchStatsParams {
    pub start: i64,
    pub end: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Path(employee_id): Path<String>,
    params: Result<Query<PunchStatsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let query = PunchStatsQuery {
        employee_id,
        start: params.start,
        end: params.end,
    };
    match state.punch_stats.handle(&actor, query).await {
        Ok(stats) => Json(stats).into_response(),
        Err(error) => error.into_response(),
    }
}
