//! Authenticate Use Case
//!
//! Turns request headers into a verified principal.

use axum::http::HeaderMap;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::domain::principal::Principal;
use crate::domain::verifier::IdentityVerifier;
use crate::error::AuthResult;

/// Authenticate use case
pub struct AuthenticateUseCase<V>
where
    V: IdentityVerifier,
{
    verifier: Arc<V>,
}

impl<V> AuthenticateUseCase<V>
where
    V: IdentityVerifier,
{
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }

    /// Extract the bearer token and verify it
    ///
    /// Fails before contacting the verifier when the header is absent or
    /// does not use the `Bearer` scheme.
    pub async fn execute(&self, headers: &HeaderMap) -> AuthResult<Principal> {
        let token = extract_bearer_token(headers)?.to_owned();

        let principal = self.verifier.verify(&token).await?;

        tracing::debug!(
            subject = %principal.subject,
            email = %principal.email,
            "Bearer token verified"
        );

        Ok(principal)
    }
}
