use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::error::AppError;

/// The header carrying the id of the acting user.
pub const ACTOR_HEADER: &str = "x-blog-actor";

/// The acting user of a request, if one was identified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Actor(pub Option<i64>);

impl Actor {
    /// The actor id, with its absence treated as forbidden.
    pub fn required(self) -> Result<i64, AppError> {
        self.0.ok_or(AppError::Forbidden)
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get(ACTOR_HEADER) {
            None => Ok(Actor(None)),
            Some(value) => value.to_str()
                .ok()
                .and_then(|s| s.trim().parse::<i64>().ok())
                .map(|id| Actor(Some(id)))
                .ok_or(AppError::BadRequest),
        }
    }
}
