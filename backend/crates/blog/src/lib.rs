//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Blog, comment and wishlist types, ranking, repository traits
//! - `application/` - One use case per endpoint
//! - `infra/` - MongoDB and in-memory repositories, query construction
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Route policy
//! - Reads, comments and the wishlist toggle are public
//! - Creating/updating blogs and reading a wishlist need a verified bearer
//!   token; reading a wishlist additionally needs the token's email to match

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{BlogConfig, StorageConfig};
pub use error::{BlogError, BlogResult};
pub use infra::memory::InMemoryRepository;
pub use infra::mongo::MongoRepository;
pub use presentation::router::{blog_router, blog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
