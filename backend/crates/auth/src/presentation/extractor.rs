//! Principal Extractor

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::principal::Principal;
use crate::error::AuthError;

/// The verified principal of the current request
///
/// Only available behind [`require_bearer_auth`](crate::require_bearer_auth);
/// a handler that takes this extractor cannot run unauthenticated.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Authenticated)
            .ok_or(AuthError::MissingToken)
    }
}
