use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quill_core::ServiceError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // the cause stays in the log, clients get a bare 500
        error!(error = %self, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Rejected `allowed origin` settings.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("allowed origin must not be empty")]
    Empty,
    #[error("allowed origin must name a single origin, not '*'")]
    Wildcard,
    #[error("allowed origin is not a valid header value: {0:?}")]
    InvalidOrigin(String),
}
