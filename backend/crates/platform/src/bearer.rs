//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` headers.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,

    #[error("Authorization header is not a bearer token")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// ## Returns
/// * `Ok(&str)` - the token, without the `Bearer ` prefix
/// * `Err(BearerError::Missing)` - no `Authorization` header
/// * `Err(BearerError::Malformed)` - wrong scheme, non-ASCII value or empty token
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::Malformed)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
