use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quill_core::Outcome;
use serde::Serialize;

/// Turns a service [`Outcome`] into an HTTP response.
///
/// | Outcome     | Status | Body |
/// |-------------|--------|------|
/// | `Ok`        | 200    | JSON |
/// | `Created`   | 201    | JSON |
/// | `NoContent` | 204    | none |
/// | `NotFound`  | 404    | none |
pub struct OutcomeResponse<T>(pub Outcome<T>);

impl<T> From<Outcome<T>> for OutcomeResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self(outcome)
    }
}

impl<T: Serialize> IntoResponse for OutcomeResponse<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Outcome::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Outcome::NoContent => StatusCode::NO_CONTENT.into_response(),
            Outcome::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
