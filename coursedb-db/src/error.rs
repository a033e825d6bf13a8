use std::path::PathBuf;

use coursedb_catalog::Course;
use thiserror::Error;

/// Errors raised while reading the course store.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open store at {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("SQLite error: {0}")]
    Query(#[from] rusqlite::Error),
    #[error(transparent)]
    NotFound(#[from] NotFound),
}

impl CatalogError {
    pub fn connection(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Connection {
            path: path.into(),
            source,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A named absence. Distinct from an empty result set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("author not found for course row {course_pk}")]
    Author { course_pk: i64 },
    #[error("clip count query returned no row")]
    CountRow,
}

/// A failed catalog read, carrying the courses completed before the failure.
///
/// The course being assembled when the error hit is not included.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct PartialCatalog {
    pub courses: Vec<Course>,
    #[source]
    pub source: CatalogError,
}

impl PartialCatalog {
    pub fn new(courses: Vec<Course>, source: CatalogError) -> Self {
        Self { courses, source }
    }

    pub fn into_parts(self) -> (Vec<Course>, CatalogError) {
        (self.courses, self.source)
    }
}
