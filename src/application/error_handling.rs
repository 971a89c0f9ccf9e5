// src/application/error_handling.rs
//
// AppError → HTTP response mapping
//
// ARCHITECTURE:
// - Maps internal errors → status code + {"msg": ...} body
// - Never exposes internal implementation details
// - Logs internal failures for debugging

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error body for all failure responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl ErrorBody {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
        }
    }
}

/// Classify an error into the status code and message the client sees.
pub fn status_for(error: &AppError) -> (StatusCode, &'static str) {
    match error {
        AppError::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request"),
        AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
        AppError::Database(_)
        | AppError::Pool(_)
        | AppError::Serialization(_)
        | AppError::Other(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = status_for(&self);

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(ErrorBody::new(msg))).into_response()
    }
}
