//! Application error type mapping to HTTP status codes and the error
//! envelope format.
//!
//! Every failure renders as `{"error": {"message": ..., "status": ...}}`
//! with the status duplicated in the body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use quill_types::error::{PostError, UserError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// User-related errors.
    User(UserError),
    /// Post-related errors.
    Post(PostError),
    /// Path parameter failed numeric coercion.
    InvalidId(String),
    /// Request body failed to parse as JSON.
    InvalidBody {
        status: StatusCode,
        message: String,
    },
    /// Unmatched route.
    RouteNotFound,
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        AppError::User(e)
    }
}

impl From<PostError> for AppError {
    fn from(e: PostError) -> Self {
        AppError::Post(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::User(UserError::NotFound) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            AppError::User(UserError::Conflict(msg)) => (StatusCode::CONFLICT, msg.clone()),
            AppError::User(e @ UserError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Post(PostError::NotFound) => {
                (StatusCode::NOT_FOUND, "Post not found".to_string())
            }
            AppError::Post(e @ PostError::AuthorNotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Post(e @ PostError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::InvalidBody { status, message } => (*status, message.clone()),
            AppError::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("invalid id '{raw}': expected a number"),
            ),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %message, "request failed");
        }

        let body = json!({
            "error": {
                "message": message,
                "status": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}
