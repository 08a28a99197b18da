//! Accounts Error Types
//!
//! Feature-crate error variants that map onto the API's fixed client
//! taxonomy. Every variant is logged server-side before a response is
//! written; store and hash failures reach the client only as a generic
//! "Internal server error".

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Email already registered (duplicate registration)
    #[error("Email already registered")]
    EmailTaken,

    /// Wrong email or wrong password; the two are indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User record not found
    #[error("User not found")]
    UserNotFound,

    /// Required field missing from the request body
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field-level validation failure
    #[error("{0}")]
    Validation(String),

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

impl AccountError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::EmailTaken => StatusCode::BAD_REQUEST,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::UserNotFound => StatusCode::NOT_FOUND,
            AccountError::MissingField(_)
            | AccountError::Validation(_)
            | AccountError::MalformedBody => StatusCode::BAD_REQUEST,
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message; internals are never exposed
    fn client_message(&self) -> String {
        match self {
            AccountError::Database(_) | AccountError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({ "error": self.client_message() });
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AccountError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AccountError {
    fn from(err: platform::token::TokenError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for AccountError {
    fn from(_: axum::extract::multipart::MultipartError) -> Self {
        AccountError::MalformedBody
    }
}
