//! Infrastructure Layer
//!
//! Storage backends and the query documents they run.

pub mod convert;
pub mod memory;
pub mod mongo;
pub mod query;
