// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Unusable request payload; 400 with the message as-is.
    Validation(String),
    /// Distance lookup failed or returned an unusable shape; 500.
    Upstream(String),
    /// Unexpected fault inside the quote math; 500 plus a generic message.
    Computation(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        AppError::Computation(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Upstream(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Computation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": msg,
                    "message": "An error occurred during calculation.",
                })),
            )
                .into_response(),
        }
    }
}
