//! Domain Layer
//!
//! - Principal (the verified identity)
//! - Identity verifier trait (interface to the external identity provider)

pub mod principal;
pub mod verifier;
