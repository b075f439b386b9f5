//! Presentation Layer
//!
//! Middleware and extractor used by protected routes.

pub mod extractor;
pub mod middleware;

pub use extractor::Authenticated;
pub use middleware::{AuthMiddlewareState, require_bearer_auth};
