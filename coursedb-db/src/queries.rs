//! Read queries that assemble the catalog tree below the course level.
//!
//! Each function runs exactly one query. Rows are collected before any
//! nested query runs, so only one statement is live on the connection at a
//! time.

use coursedb_catalog::{Clip, Course, Module};
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{CatalogError, NotFound};
use crate::schema::{AUTHOR_TABLE, CLIP_TABLE, COURSE_AUTHOR_TABLE, COURSE_TABLE, MODULE_TABLE};

// ── Authors ─────────────────────────────────────────────────────────────────

/// Resolve the author of a course through the course/author association.
///
/// The association is shaped many-to-many but the store models one author
/// per course, so the first match wins. A course with no association row is
/// an error.
///
/// An author row with a NULL name resolves to `None` (shown as "unknown")
/// instead of failing the scan.
pub fn resolve_author(conn: &Connection, course_pk: i64) -> Result<Option<String>, CatalogError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT a.ZID
         FROM {COURSE_AUTHOR_TABLE} j
         JOIN {AUTHOR_TABLE} a ON a.Z_PK = j.Z_3AUTHORS
         WHERE j.Z_14COURSEHEADERS = ?1"
    ))?;
    let author = stmt
        .query_row(params![course_pk], |row| row.get::<_, Option<String>>(0))
        .optional()?;
    match author {
        Some(name) => Ok(name),
        None => Err(NotFound::Author { course_pk }.into()),
    }
}

// ── Modules ─────────────────────────────────────────────────────────────────

struct ModuleRow {
    pk: i64,
    title: String,
    id: String,
}

/// Append the modules of a course, ordered by the per-course ordinal.
///
/// The author is resolved once and copied into every module. If it cannot
/// be resolved no module query is issued.
pub fn assemble_modules(
    conn: &Connection,
    course_pk: i64,
    course: &mut Course,
) -> Result<(), CatalogError> {
    let author = resolve_author(conn, course_pk)?;

    let rows = {
        let mut stmt = conn.prepare(&format!(
            "SELECT Z_PK, ZTITLE, ZID FROM {MODULE_TABLE}
             WHERE ZCOURSE = ?1 ORDER BY Z_FOK_COURSE ASC"
        ))?;
        let rows = stmt.query_map(params![course_pk], |row| {
            Ok(ModuleRow {
                pk: row.get(0)?,
                title: row.get(1)?,
                id: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>()?
    };

    for (position, row) in (1..).zip(rows) {
        let mut module = Module::new(position, row.title, row.id, author.clone());
        assemble_clips(conn, row.pk, &mut module)?;
        log::debug!(
            "  module {} '{}': {} clips",
            module.position,
            module.title,
            module.clips.len()
        );
        course.modules.push(module);
    }

    Ok(())
}

// ── Clips ───────────────────────────────────────────────────────────────────

/// Append the clips of a module, ordered by the per-module ordinal.
pub fn assemble_clips(
    conn: &Connection,
    module_pk: i64,
    module: &mut Module,
) -> Result<(), CatalogError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT ZTITLE, ZID FROM {CLIP_TABLE}
         WHERE ZMODULE = ?1 ORDER BY Z_FOK_MODULE ASC"
    ))?;
    let rows = stmt.query_map(params![module_pk], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    for (position, row) in (1..).zip(rows) {
        let (title, id) = row?;
        module.clips.push(Clip::new(position, title, id));
    }

    Ok(())
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Count every clip row in the store, independent of course structure.
pub fn count_clips(conn: &Connection) -> Result<u64, CatalogError> {
    let mut stmt = conn.prepare(&format!("SELECT COUNT(*) FROM {CLIP_TABLE}"))?;
    let mut rows = stmt.query([])?;
    let Some(row) = rows.next()? else {
        return Err(NotFound::CountRow.into());
    };
    let count: i64 = row.get(0)?;
    u64::try_from(count)
        .map_err(|_| CatalogError::Query(rusqlite::Error::IntegralValueOutOfRange(0, count)))
}

/// Count course rows. Used for store diagnostics only.
pub fn count_courses(conn: &Connection) -> Result<u64, CatalogError> {
    let count: i64 =
        conn.query_row(&format!("SELECT COUNT(*) FROM {COURSE_TABLE}"), [], |r| r.get(0))?;
    u64::try_from(count)
        .map_err(|_| CatalogError::Query(rusqlite::Error::IntegralValueOutOfRange(0, count)))
}
