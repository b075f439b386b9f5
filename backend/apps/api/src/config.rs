//! Server Configuration
//!
//! Read once from the process environment at startup.

use anyhow::{Context, bail};
use auth::AuthConfig;
use blog::StorageConfig;
use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Everything the binary needs to start serving
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub mongodb_uri: String,
    pub storage: StorageConfig,
    /// Comma-separated allow-list; `None` allows any origin
    pub frontend_origins: Option<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?,
            None => DEFAULT_PORT,
        };

        let mongodb_uri = var("MONGODB_URI").context("MONGODB_URI must be set")?;

        let storage = match var("MONGODB_DATABASE") {
            Some(database) => StorageConfig::with_database(database),
            None => StorageConfig::default(),
        };

        let mut auth = match (var("AUTH_JWT_PUBLIC_KEY"), var("AUTH_JWT_SECRET")) {
            (Some(pem), _) => AuthConfig::with_rsa_pem(pem),
            (None, Some(secret)) => AuthConfig::with_secret(secret),
            (None, None) => bail!("AUTH_JWT_SECRET or AUTH_JWT_PUBLIC_KEY must be set"),
        };
        if let Some(issuer) = var("AUTH_JWT_ISSUER") {
            auth = auth.issuer(issuer);
        }
        if let Some(audience) = var("AUTH_JWT_AUDIENCE") {
            auth = auth.audience(audience);
        }

        Ok(Self {
            port,
            mongodb_uri,
            storage,
            frontend_origins: var("FRONTEND_ORIGINS"),
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::JwtKey;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("AUTH_JWT_SECRET", "secret"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.storage.database, "cascadeBlog");
        assert!(config.frontend_origins.is_none());
        assert!(matches!(config.auth.key, JwtKey::Hmac(_)));
        assert!(config.auth.issuer.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("MONGODB_DATABASE", "blogStaging"),
            ("FRONTEND_ORIGINS", "https://blog.example.com"),
            ("AUTH_JWT_PUBLIC_KEY", "-----BEGIN PUBLIC KEY-----"),
            ("AUTH_JWT_ISSUER", "https://issuer.example.com"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.storage.database, "blogStaging");
        assert_eq!(
            config.frontend_origins.as_deref(),
            Some("https://blog.example.com")
        );
        assert!(matches!(config.auth.key, JwtKey::RsaPem(_)));
        assert_eq!(
            config.auth.issuer.as_deref(),
            Some("https://issuer.example.com")
        );
    }

    #[test]
    fn test_missing_required() {
        assert!(load(&[("AUTH_JWT_SECRET", "secret")]).is_err());
        assert!(load(&[("MONGODB_URI", "mongodb://localhost")]).is_err());
        assert!(
            load(&[
                ("MONGODB_URI", "mongodb://localhost"),
                ("AUTH_JWT_SECRET", "secret"),
                ("PORT", "http"),
            ])
            .is_err()
        );
    }
}
