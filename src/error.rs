//! Central error type shared by handlers and repositories.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or invalid session token.
    #[error("unauthorized")]
    Unauthorized,
    /// Malformed or missing input; the caller must correct and resend.
    #[error("{0}")]
    Validation(String),
    /// Unique-key collision (duplicate player name).
    #[error("{0}")]
    Conflict(String),
    /// Store unreachable or a query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Invariant broken server-side; opaque to the caller.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}

/// True when the underlying driver reports a unique-constraint violation,
/// so a duplicate player name can surface as 409 rather than 500.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::Validation(m) | ApiError::Conflict(m) => m.clone(),
            ApiError::Database(e) => {
                log::error!("database error: {e}");
                "Internal server error".to_string()
            }
            ApiError::Internal(m) => {
                log::error!("{m}");
                "Internal server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}
