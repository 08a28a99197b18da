//! Posts Error Types
//!
//! Same shape as the accounts errors: a fixed client taxonomy, logged
//! server-side, with store failures reduced to a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Posts-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Posts-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// No post matched the (post id, owner) pair. Also covers an
    /// unparseable post id in the path.
    #[error("Post not found")]
    PostNotFound,

    /// Required field missing from the request body
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Request body could not be parsed
    #[error("Malformed request body")]
    MalformedBody,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::PostNotFound => StatusCode::NOT_FOUND,
            PostError::MissingField(_) | PostError::MalformedBody => StatusCode::BAD_REQUEST,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; internals are never exposed
    fn client_message(&self) -> String {
        match self {
            PostError::Database(_) | PostError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({ "error": self.client_message() });
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<axum::extract::multipart::MultipartError> for PostError {
    fn from(_: axum::extract::multipart::MultipartError) -> Self {
        PostError::MalformedBody
    }
}
