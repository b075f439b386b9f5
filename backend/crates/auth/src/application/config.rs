//! Application Configuration
//!
//! Configuration for bearer token verification.

use std::time::Duration;

/// Key material used to check token signatures
#[derive(Clone)]
pub enum JwtKey {
    /// Shared HMAC secret (HS256)
    Hmac(Vec<u8>),
    /// RSA public key in PEM form (RS256)
    RsaPem(Vec<u8>),
}

impl std::fmt::Debug for JwtKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        match self {
            JwtKey::Hmac(_) => f.write_str("JwtKey::Hmac(..)"),
            JwtKey::RsaPem(_) => f.write_str("JwtKey::RsaPem(..)"),
        }
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signature verification key
    pub key: JwtKey,
    /// Required `iss` claim, if any
    pub issuer: Option<String>,
    /// Required `aud` claim, if any
    pub audience: Option<String>,
    /// Clock skew tolerated on `exp` / `nbf`
    pub leeway: Duration,
}

impl AuthConfig {
    /// HS256 config with default leeway and no issuer/audience checks
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            key: JwtKey::Hmac(secret.into()),
            issuer: None,
            audience: None,
            leeway: Duration::from_secs(60),
        }
    }

    /// RS256 config from a PEM encoded public key
    pub fn with_rsa_pem(pem: impl Into<Vec<u8>>) -> Self {
        Self {
            key: JwtKey::RsaPem(pem.into()),
            ..Self::with_secret(Vec::new())
        }
    }

    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_key() {
        let config = AuthConfig::with_secret("super-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("Hmac"));
    }

    #[test]
    fn test_builders() {
        let config = AuthConfig::with_rsa_pem("pem")
            .issuer("https://issuer.example.com")
            .audience("cascade-blog");
        assert!(matches!(config.key, JwtKey::RsaPem(_)));
        assert_eq!(config.issuer.as_deref(), Some("https://issuer.example.com"));
        assert_eq!(config.audience.as_deref(), Some("cascade-blog"));
        assert_eq!(config.leeway, Duration::from_secs(60));
    }
}
