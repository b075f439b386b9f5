//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared HTTP plumbing:
//! - Bearer token extraction from the `Authorization` header
//! - CORS layer construction from configured origins

pub mod bearer;
pub mod cors;
