mod common;

use common::Fixture;
use coursedb_db::schema::{AUTHOR_TABLE, CLIP_TABLE};
use coursedb_db::*;

#[test]
fn complete_store_has_no_missing_tables() {
    let f = Fixture::new();
    assert!(f.store().missing_tables().unwrap().is_empty());
}

#[test]
fn bare_store_misses_every_table() {
    let f = Fixture::bare();
    let missing = f.store().missing_tables().unwrap();
    assert_eq!(missing, REQUIRED_TABLES.to_vec());
}

#[test]
fn reports_only_absent_tables() {
    let f = Fixture::new();
    f.conn
        .execute_batch("DROP TABLE ZCLIPCD; DROP TABLE ZAUTHORHEADERCD;")
        .unwrap();
    let missing = missing_tables(&f.conn).unwrap();
    assert_eq!(missing, vec![CLIP_TABLE, AUTHOR_TABLE]);
}

#[test]
fn missing_clip_table_fails_clip_count() {
    let f = Fixture::new();
    f.conn.execute_batch("DROP TABLE ZCLIPCD;").unwrap();
    let err = f.store().clip_count().unwrap_err();
    assert!(matches!(err, CatalogError::Query(_)));
}
