//! Infrastructure Layer
//!
//! Concrete identity verifier implementations.

pub mod jwt;
