//! Identity Verifier Trait
//!
//! Interface to whatever validates bearer tokens. Implementation is in
//! the infrastructure layer.

use crate::domain::principal::Principal;
use crate::error::AuthResult;

/// Token verifier trait
#[trait_variant::make(IdentityVerifier: Send)]
pub trait LocalIdentityVerifier {
    /// Validate a raw bearer token and decode its principal
    async fn verify(&self, token: &str) -> AuthResult<Principal>;
}
