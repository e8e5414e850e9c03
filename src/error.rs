//! Application error types and HTTP response mapping.
//!
//! `AppError` covers everything that can stop a request before a summary
//! exists and implements Axum's `IntoResponse` so handlers can return it
//! directly with a JSON error body.
//!
//! Error mappings:
//! - `InvalidRepositoryUrl`, `InvalidRequest` → 400
//! - `RepositoryNotFound` → 404
//! - `UpstreamUnavailable` → 502
//! - `Internal` → 500
//!
//! `GenerationFailure` is the generator's recovered error. It never becomes
//! an HTTP response; the generator swaps it for the fallback summary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid GitHub repository URL: {0}")]
    InvalidRepositoryUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("GitHub API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRepositoryUrl(_) | AppError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::RepositoryNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Why the completion stage produced no usable summary.
#[derive(Error, Debug)]
pub enum GenerationFailure {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("completion endpoint returned no content")]
    EmptyResponse,

    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("model output did not match the summary shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (AppError::InvalidRepositoryUrl("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::RepositoryNotFound("o/n".into()), StatusCode::NOT_FOUND),
            (AppError::UpstreamUnavailable("down".into()), StatusCode::BAD_GATEWAY),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
