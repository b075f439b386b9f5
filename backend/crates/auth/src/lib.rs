//! Auth (Identity Verification) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Principal and the identity verifier trait
//! - `application/` - Configuration and the authenticate use case
//! - `infra/` - JWT-based verifier
//! - `presentation/` - Middleware and extractor for protected routes
//!
//! ## Security Model
//! - Tokens arrive as `Authorization: Bearer <token>` and are verified on
//!   every request; nothing is cached or stored server side
//! - A verified principal carries at least a subject and an email
//! - Routes opt into verification by being mounted behind
//!   [`require_bearer_auth`]; their handlers take [`Authenticated`]

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, JwtKey};
pub use domain::principal::Principal;
pub use domain::verifier::IdentityVerifier;
pub use error::{AuthError, AuthResult};
pub use infra::jwt::{JwtIdentityVerifier, TokenClaims};
pub use presentation::extractor::Authenticated;
pub use presentation::middleware::{AuthMiddlewareState, require_bearer_auth};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
