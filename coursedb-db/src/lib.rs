//! SQLite reader that rebuilds the course catalog tree.
//!
//! The store is opened read-only (via rusqlite with the bundled feature).
//! [`CatalogStore`] is the entry point; the free functions in [`queries`]
//! run the individual author, module and clip lookups on an open connection.

pub mod error;
pub mod queries;
pub mod schema;
pub mod store;

pub use error::{CatalogError, NotFound, PartialCatalog};
pub use queries::{assemble_clips, assemble_modules, count_clips, count_courses, resolve_author};
pub use schema::{REQUIRED_TABLES, missing_tables};
pub use store::CatalogStore;
