//! Fixture stores for integration tests.
//!
//! Builds a SQLite file with the same table shapes the course store uses,
//! inside a temp dir that lives as long as the fixture.

#![allow(dead_code)]

use std::path::PathBuf;

use coursedb_db::CatalogStore;
use rusqlite::{Connection, params};
use tempfile::TempDir;

pub const FIXTURE_SCHEMA: &str = r#"
CREATE TABLE ZCOURSEHEADERCD (
    Z_PK INTEGER PRIMARY KEY,
    ZTITLE VARCHAR,
    ZID VARCHAR
);
CREATE TABLE ZMODULECD (
    Z_PK INTEGER PRIMARY KEY,
    ZTITLE VARCHAR,
    ZID VARCHAR,
    ZCOURSE INTEGER,
    Z_FOK_COURSE INTEGER
);
CREATE TABLE ZCLIPCD (
    Z_PK INTEGER PRIMARY KEY,
    ZTITLE VARCHAR,
    ZID VARCHAR,
    ZMODULE INTEGER,
    Z_FOK_MODULE INTEGER
);
CREATE TABLE Z_3COURSEHEADERS (
    Z_PK INTEGER PRIMARY KEY,
    Z_3AUTHORS INTEGER,
    Z_14COURSEHEADERS INTEGER
);
CREATE TABLE ZAUTHORHEADERCD (
    Z_PK INTEGER PRIMARY KEY,
    ZID VARCHAR
);
"#;

pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
    pub conn: Connection,
}

impl Fixture {
    /// An empty store with every required table.
    pub fn new() -> Self {
        let fixture = Self::bare();
        fixture.conn.execute_batch(FIXTURE_SCHEMA).unwrap();
        fixture
    }

    /// An empty SQLite file with no tables at all.
    pub fn bare() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courses.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 1;").unwrap();
        Self { dir, path, conn }
    }

    pub fn store(&self) -> CatalogStore {
        CatalogStore::new(&self.path)
    }

    pub fn course(&self, pk: i64, title: &str, id: &str) -> &Self {
        self.conn
            .execute(
                "INSERT INTO ZCOURSEHEADERCD (Z_PK, ZTITLE, ZID) VALUES (?1, ?2, ?3)",
                params![pk, title, id],
            )
            .unwrap();
        self
    }

    pub fn author(&self, pk: i64, name: Option<&str>) -> &Self {
        self.conn
            .execute(
                "INSERT INTO ZAUTHORHEADERCD (Z_PK, ZID) VALUES (?1, ?2)",
                params![pk, name],
            )
            .unwrap();
        self
    }

    /// Link an author to a course through the association table.
    pub fn course_author(&self, course_pk: i64, author_pk: i64) -> &Self {
        self.conn
            .execute(
                "INSERT INTO Z_3COURSEHEADERS (Z_3AUTHORS, Z_14COURSEHEADERS) VALUES (?1, ?2)",
                params![author_pk, course_pk],
            )
            .unwrap();
        self
    }

    pub fn module(&self, pk: i64, course_pk: i64, ordinal: i64, title: &str, id: &str) -> &Self {
        self.conn
            .execute(
                "INSERT INTO ZMODULECD (Z_PK, ZTITLE, ZID, ZCOURSE, Z_FOK_COURSE)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![pk, title, id, course_pk, ordinal],
            )
            .unwrap();
        self
    }

    pub fn clip(&self, module_pk: i64, ordinal: i64, title: &str, id: &str) -> &Self {
        self.conn
            .execute(
                "INSERT INTO ZCLIPCD (ZTITLE, ZID, ZMODULE, Z_FOK_MODULE) VALUES (?1, ?2, ?3, ?4)",
                params![title, id, module_pk, ordinal],
            )
            .unwrap();
        self
    }
}

/// One course "Go" (C1) by Jane with two modules stored out of order.
pub fn go_course() -> Fixture {
    let f = Fixture::new();
    f.course(1, "Go", "C1")
        .author(10, Some("Jane"))
        .course_author(1, 10)
        .module(100, 1, 2, "Advanced", "C1-M-adv")
        .module(101, 1, 1, "Basics", "C1-M-basics")
        .clip(100, 1, "Goroutines", "adv-1")
        .clip(101, 2, "Variables", "basics-2")
        .clip(101, 1, "Hello World", "basics-1");
    f
}
