//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use config::{AuthConfig, JwtKey};
