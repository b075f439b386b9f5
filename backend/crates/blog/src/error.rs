//! Blog Error Types
//!
//! This module provides blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
///
/// Every handler returns these; storage details never reach the client.
#[derive(Debug, Error)]
pub enum BlogError {
    /// Path or body identifier is not a valid ObjectId
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Request body or parameter rejected before touching storage
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Authenticated principal does not own the requested resource
    #[error("Forbidden")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Stored document could not be converted to/from JSON
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::InvalidId(_) | BlogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            BlogError::Forbidden => StatusCode::FORBIDDEN,
            BlogError::Database(_) | BlogError::Conversion(_) | BlogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::InvalidId(_) | BlogError::InvalidInput(_) => ErrorKind::BadRequest,
            BlogError::Forbidden => ErrorKind::Forbidden,
            BlogError::Database(_) | BlogError::Conversion(_) | BlogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures collapse to one generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            BlogError::InvalidId(raw) => {
                AppError::bad_request(format!("Invalid identifier: {raw}"))
                    .with_action("Identifiers are 24 character hexadecimal strings")
            }
            BlogError::InvalidInput(msg) => AppError::bad_request(msg.clone()),
            BlogError::Forbidden => {
                AppError::forbidden("You may only access your own wishlist")
            }
            BlogError::Database(_) | BlogError::Conversion(_) | BlogError::Internal(_) => {
                AppError::internal("Internal server error")
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Conversion(msg) => {
                tracing::error!(message = %msg, "Blog document conversion error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::Forbidden => {
                tracing::warn!("Wishlist ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Blog request rejected");
            }
        }
    }
}

impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        err.to_app_error()
    }
}

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => BlogError::InvalidInput(err.message().to_string()),
            ErrorKind::Forbidden => BlogError::Forbidden,
            _ => BlogError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(BlogError, StatusCode)> = vec![
            (BlogError::InvalidId("123".into()), StatusCode::BAD_REQUEST),
            (
                BlogError::InvalidInput("empty update".into()),
                StatusCode::BAD_REQUEST,
            ),
            (BlogError::Forbidden, StatusCode::FORBIDDEN),
            (
                BlogError::Conversion("bad bson".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                BlogError::Internal("oops".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code().as_u16(), error.kind().status_code());
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_server_errors_are_generic() {
        let app_err = BlogError::Conversion("field x has bad type".into()).to_app_error();
        assert_eq!(app_err.message(), "Internal server error");
        assert!(app_err.is_server_error());
    }

    #[test]
    fn test_from_app_error() {
        let err: BlogError = AppError::bad_request("Invalid email").into();
        assert!(matches!(err, BlogError::InvalidInput(msg) if msg == "Invalid email"));

        let err: BlogError = AppError::internal("boom").into();
        assert!(matches!(err, BlogError::Internal(_)));
    }
}
