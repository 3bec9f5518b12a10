use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use turing_core::error::CoreError;

/// Errors a game endpoint can answer with. Every variant renders as
/// `{ "error": "<message>" }`.
#[derive(Debug)]
pub enum ApiError {
    /// No live session behind the request's cookie.
    SessionNotFound,
    /// The submitted chat message was blank.
    EmptyMessage,
    InvalidRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::EmptyMessage | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the player. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::SessionNotFound => "session not found".to_string(),
            ApiError::EmptyMessage => "empty message".to_string(),
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::Internal(_) => "internal server error".to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(detail = %detail, "game request failed");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::EmptyMessage => ApiError::EmptyMessage,
            CoreError::InvalidSetting(_) => ApiError::InvalidRequest(e.to_string()),
            CoreError::Generation(_) => ApiError::Internal(e.to_string()),
        }
    }
}
