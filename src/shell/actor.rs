// Request actor extraction.
//
// Authentication happens upstream; the gateway forwards the verified caller
// as `x-actor-id` and `x-actor-role`.

use crate::shared::core::primitives::{Actor, Role};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorRejection {
    #[error("missing {0} header")]
    Missing(&'static str),

    #[error("invalid {0} header")]
    Invalid(&'static str),
}

impl IntoResponse for ActorRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

pub fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ActorRejection> {
    let id = header(headers, ACTOR_ID_HEADER)?;
    let role: Role = header(headers, ACTOR_ROLE_HEADER)?
        .parse()
        .map_err(|_| ActorRejection::Invalid(ACTOR_ROLE_HEADER))?;
    Ok(Actor::new(id, role))
}

fn header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, ActorRejection> {
    let value = headers
        .get(name)
        .ok_or(ActorRejection::Missing(name))?
        .to_str()
        .map_err(|_| ActorRejection::Invalid(name))?
        .trim();
    if value.is_empty() {
        return Err(ActorRejection::Invalid(name));
    }
    Ok(value)
}

/// Extractor for the calling actor; rejects with 401.
pub struct AuthenticatedActor(pub Actor);

impl<S> FromRequestParts<S> for AuthenticatedActor
where
    S: Send + Sync,
{
    type Rejection = ActorRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        actor_from_headers(&parts.headers).map(AuthenticatedActor)
    }
}
