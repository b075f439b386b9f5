//! JWT Identity Verifier
//!
//! Verifies signed JSON Web Tokens issued by the external identity
//! provider. Signature, expiry and (optionally) issuer and audience are
//! checked; the principal is built from the `sub` and `email` claims.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use kernel::email::Email;
use serde::{Deserialize, Serialize};

use crate::application::config::{AuthConfig, JwtKey};
use crate::domain::principal::Principal;
use crate::domain::verifier::IdentityVerifier;
use crate::error::{AuthError, AuthResult};

/// Claims read from a token
///
/// `iss` and `aud` are checked by `jsonwebtoken` itself and are not
/// decoded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: u64,
}

/// JWT-backed verifier
#[derive(Clone)]
pub struct JwtIdentityVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    /// Build a verifier from configuration
    ///
    /// Fails only when the configured key material cannot be parsed.
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let (decoding_key, algorithm) = match &config.key {
            JwtKey::Hmac(secret) => {
                if secret.is_empty() {
                    return Err(AuthError::Internal("JWT secret is empty".to_string()));
                }
                (DecodingKey::from_secret(secret), Algorithm::HS256)
            }
            JwtKey::RsaPem(pem) => {
                let key = DecodingKey::from_rsa_pem(pem)
                    .map_err(|e| AuthError::Internal(format!("Invalid RSA public key: {e}")))?;
                (key, Algorithm::RS256)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = config.leeway.as_secs();
        // set_issuer/set_audience only check a claim that is present
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
            validation.required_spec_claims.insert("iss".to_string());
        }
        match &config.audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                validation.required_spec_claims.insert("aud".to_string());
            }
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> AuthResult<Principal> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?.claims;

        let email = claims
            .email
            .ok_or_else(|| AuthError::InvalidToken("token has no email claim".to_string()))?;
        let email = Email::new(email)
            .map_err(|e| AuthError::InvalidToken(format!("email claim: {}", e.message())))?;

        Ok(Principal::new(claims.sub, email))
    }
}
