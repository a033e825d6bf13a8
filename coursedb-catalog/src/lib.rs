//! Course catalog data model: courses, modules, clips and tree navigation.
//!
//! This crate has no database dependency. `coursedb-db` builds these types
//! from a store; consumers can display or serialize them directly.

pub mod types;

pub use types::*;
