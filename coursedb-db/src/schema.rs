//! Table and column names of the course store.
//!
//! The schema is generated by the application that owns the store, so the
//! names are fixed and must match exactly. Nothing here creates or alters
//! tables; the store is only ever read.

use rusqlite::{Connection, params};

use crate::error::CatalogError;

/// Course headers: `Z_PK`, `ZTITLE`, `ZID`.
pub const COURSE_TABLE: &str = "ZCOURSEHEADERCD";

/// Modules: `Z_PK`, `ZTITLE`, `ZID`, `ZCOURSE`, `Z_FOK_COURSE`.
pub const MODULE_TABLE: &str = "ZMODULECD";

/// Clips: `ZTITLE`, `ZID`, `ZMODULE`, `Z_FOK_MODULE`.
pub const CLIP_TABLE: &str = "ZCLIPCD";

/// Course/author association: `Z_3AUTHORS`, `Z_14COURSEHEADERS`.
pub const COURSE_AUTHOR_TABLE: &str = "Z_3COURSEHEADERS";

/// Author headers: `Z_PK`, `ZID` (the author's display name).
pub const AUTHOR_TABLE: &str = "ZAUTHORHEADERCD";

/// Every table the catalog reader touches.
pub const REQUIRED_TABLES: [&str; 5] = [
    COURSE_TABLE,
    MODULE_TABLE,
    CLIP_TABLE,
    COURSE_AUTHOR_TABLE,
    AUTHOR_TABLE,
];

/// List the required tables that are absent from the store.
pub fn missing_tables(conn: &Connection) -> Result<Vec<&'static str>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
    )?;
    let mut missing = Vec::new();
    for table in REQUIRED_TABLES {
        let exists: bool = stmt.query_row(params![table], |row| row.get(0))?;
        if !exists {
            missing.push(table);
        }
    }
    Ok(missing)
}
