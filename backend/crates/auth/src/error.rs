//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No Authorization header on a protected route
    #[error("Missing bearer token")]
    MissingToken,

    /// Authorization header present but not `Bearer <token>`
    #[error("Malformed Authorization header")]
    MalformedHeader,

    /// Token failed verification (signature, expiry, claims)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Verifier could not be built or used
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::MalformedHeader | AuthError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken | AuthError::MalformedHeader | AuthError::InvalidToken(_) => {
                ErrorKind::Unauthorized
            }
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Verification details stay in the logs; clients only learn that
    /// the token was not accepted.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::MissingToken => AppError::unauthorized("Missing bearer token")
                .with_action("Send an Authorization: Bearer <token> header"),
            AuthError::MalformedHeader => AppError::unauthorized("Malformed Authorization header")
                .with_action("Use the form: Bearer <token>"),
            AuthError::InvalidToken(_) => AppError::unauthorized("Invalid or expired token"),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidToken(reason) => {
                tracing::warn!(reason = %reason, "Bearer token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::Missing => AuthError::MissingToken,
            BearerError::Malformed => AuthError::MalformedHeader,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AuthError::InvalidToken(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::MalformedHeader, StatusCode::UNAUTHORIZED),
            (
                AuthError::InvalidToken("ExpiredSignature".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::Internal("bad key".into()),
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
    fn test_invalid_token_detail_not_exposed() {
        let app_err = AuthError::InvalidToken("InvalidSignature".into()).to_app_error();
        assert!(!app_err.message().contains("InvalidSignature"));
    }

    #[test]
    fn test_from_bearer_error() {
        assert!(matches!(
            AuthError::from(BearerError::Missing),
            AuthError::MissingToken
        ));
        assert!(matches!(
            AuthError::from(BearerError::Malformed),
            AuthError::MalformedHeader
        ));
    }
}
