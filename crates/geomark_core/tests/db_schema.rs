use geomark_core::db::schema::{foreign_keys_enabled, table_exists};
use geomark_core::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_both_tables_with_foreign_keys_on() {
    let conn = open_db_in_memory().unwrap();

    assert!(table_exists(&conn, "Marker").unwrap());
    assert!(table_exists(&conn, "Image").unwrap());
    assert!(foreign_keys_enabled(&conn).unwrap());
}

#[test]
fn opening_same_database_twice_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markers.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO Marker (latitude, longitude) VALUES (58.01, 56.23);",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO Image (uri, markerId) VALUES ('file://x.jpg', 1);",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(row_count(&conn, "Marker"), 1);
    assert_eq!(row_count(&conn, "Image"), 1);
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("markers.db");

    open_db(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn open_db_under_a_regular_file_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    let err = open_db(blocker.join("markers.db")).unwrap_err();
    assert!(matches!(err, DbError::Io(_)), "unexpected error: {err}");
}

#[test]
fn marker_delete_cascades_through_the_constraint_alone() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Marker (latitude, longitude) VALUES (1.0, 2.0);
         INSERT INTO Image (uri, markerId) VALUES ('a', 1);
         INSERT INTO Image (uri, markerId) VALUES ('b', 1);",
    )
    .unwrap();

    conn.execute("DELETE FROM Marker WHERE id = 1;", []).unwrap();

    assert_eq!(row_count(&conn, "Image"), 0);
}

#[test]
fn image_insert_without_marker_is_rejected_by_engine() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute("INSERT INTO Image (uri, markerId) VALUES ('a', 42);", [])
        .unwrap_err();
    assert_eq!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::ConstraintViolation)
    );
}

#[test]
fn raw_connection_does_not_cascade_without_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markers.db");
    drop(open_db(&path).unwrap());

    let raw = Connection::open(&path).unwrap();
    assert!(!foreign_keys_enabled(&raw).unwrap());
}

fn row_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
