use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Wire shape for every error response: `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed request fields. Maps to 400.
    #[error("{0}")]
    Validation(String),
    /// Unknown short code. Maps to 404.
    #[error("{0}")]
    NotFound(String),
    /// Short code already taken. Maps to 400 on this surface.
    #[error("{0}")]
    Conflict(String),
    /// Known code whose validity window has passed. Maps to 410.
    #[error("{0}")]
    Gone(String),
    /// Backing-store or other infrastructure failure. Maps to 500 with a
    /// generic body; the real cause only reaches the log.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn gone(message: impl Into<String>) -> Self {
        Self::Gone(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Gone(message) => (StatusCode::GONE, message),
            AppError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flatten()
            .find_map(|e| e.message.clone().map(|m| m.into_owned()))
            .unwrap_or_else(|| "Invalid request body".to_string());
        AppError::bad_request(message)
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict("Shortcode already exists.");
        }
    }

    AppError::internal(e.to_string())
}
