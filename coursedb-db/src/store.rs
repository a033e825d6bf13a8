//! Entry point for reading a course store.

use std::path::{Path, PathBuf};

use coursedb_catalog::Course;
use rusqlite::{Connection, OpenFlags};

use crate::error::{CatalogError, PartialCatalog};
use crate::queries::{assemble_modules, count_clips, count_courses};
use crate::schema::{self, COURSE_TABLE};

/// A read-only course store on disk.
///
/// Holds only the path. Every operation opens its own connection and
/// closes it before returning, whether it succeeds or not.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a read-only connection to the store.
    pub fn open(&self) -> Result<Connection, CatalogError> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| CatalogError::connection(&self.path, e))
    }

    /// Read every course with its modules and clips.
    ///
    /// Courses come back in the store's natural row order. On failure the
    /// courses completed so far are returned inside the error.
    pub fn find_all(&self) -> Result<Vec<Course>, PartialCatalog> {
        let conn = self
            .open()
            .map_err(|e| PartialCatalog::new(Vec::new(), e))?;

        let (rows, scan_error) =
            read_course_rows(&conn).map_err(|e| PartialCatalog::new(Vec::new(), e))?;
        log::debug!("Found {} course rows in {}", rows.len(), self.path.display());

        let mut courses = Vec::with_capacity(rows.len());
        for row in rows {
            let mut course = Course::new(row.title, row.id);
            if let Err(e) = assemble_modules(&conn, row.pk, &mut course) {
                log::warn!("Stopped reading at course '{}': {}", course.title, e);
                return Err(PartialCatalog::new(courses, e));
            }
            log::debug!(
                "Course '{}': {} modules, {} clips",
                course.title,
                course.modules.len(),
                course.clip_count()
            );
            courses.push(course);
        }

        match scan_error {
            Some(e) => {
                log::warn!("Stopped reading after {} courses: {}", courses.len(), e);
                Err(PartialCatalog::new(courses, e))
            }
            None => Ok(courses),
        }
    }

    /// Count every clip in the store.
    pub fn clip_count(&self) -> Result<u64, CatalogError> {
        let conn = self.open()?;
        count_clips(&conn)
    }

    /// Count course rows without assembling them.
    pub fn course_count(&self) -> Result<u64, CatalogError> {
        let conn = self.open()?;
        count_courses(&conn)
    }

    /// Required tables that the store lacks. Empty for a well-formed store.
    pub fn missing_tables(&self) -> Result<Vec<&'static str>, CatalogError> {
        let conn = self.open()?;
        schema::missing_tables(&conn)
    }
}

struct CourseRow {
    pk: i64,
    title: String,
    id: String,
}

/// Read course rows up to the first one that fails to scan.
///
/// The scan error is handed back alongside the rows before it, so those
/// courses can still be assembled once the cursor is closed.
fn read_course_rows(
    conn: &Connection,
) -> Result<(Vec<CourseRow>, Option<CatalogError>), CatalogError> {
    let mut stmt = conn.prepare(&format!("SELECT Z_PK, ZTITLE, ZID FROM {COURSE_TABLE}"))?;
    let rows = stmt.query_map([], |row| {
        Ok(CourseRow {
            pk: row.get(0)?,
            title: row.get(1)?,
            id: row.get(2)?,
        })
    })?;

    let mut courses = Vec::new();
    for row in rows {
        match row {
            Ok(row) => courses.push(row),
            Err(e) => return Ok((courses, Some(e.into()))),
        }
    }
    Ok((courses, None))
}
