//! Marker/Image schema creation and checks.
//!
//! # Responsibility
//! - Create both tables when absent, leaving existing rows untouched.
//! - Report whether foreign key enforcement is active on a connection.
//!
//! # Invariants
//! - There is no versioned migration path; the schema is "create if absent".
//! - `Image.markerId` references `Marker.id` with `ON DELETE CASCADE`.

use crate::db::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables every usable connection must expose.
pub const REQUIRED_TABLES: &[&str] = &["Marker", "Image"];

/// Creates missing tables and indexes in one transaction.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.commit()?;
    Ok(())
}

/// Returns whether `PRAGMA foreign_keys` is on for this connection.
pub fn foreign_keys_enabled(conn: &Connection) -> rusqlite::Result<bool> {
    let enabled: i64 = conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))?;
    Ok(enabled == 1)
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )
}

#[cfg(test)]
mod tests {
    use super::{ensure_schema, foreign_keys_enabled, table_exists, REQUIRED_TABLES};
    use rusqlite::Connection;

    #[test]
    fn ensure_schema_creates_required_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();

        for table in REQUIRED_TABLES {
            assert!(table_exists(&conn, table).unwrap(), "missing {table}");
        }
    }

    #[test]
    fn ensure_schema_twice_keeps_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO Marker (latitude, longitude) VALUES (1.5, 2.5);",
            [],
        )
        .unwrap();

        ensure_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Marker;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn foreign_keys_are_off_on_a_raw_connection() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!foreign_keys_enabled(&conn).unwrap());

        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        assert!(foreign_keys_enabled(&conn).unwrap());
    }
}
