//! Domain Layer - Business types and rules
//!
//! This layer contains:
//! - Entities (new blogs, patches, comments, wishlist entries, receipts)
//! - Value objects (ids, list query, category filter, field names)
//! - Domain services (word count ranking)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
