use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::intelligence::DecisionError;
use crate::models::InputError;

/// Client-facing failure of a prediction request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}

impl From<DecisionError> for AppError {
    fn from(e: DecisionError) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}
