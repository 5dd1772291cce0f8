//! SQLite schema definitions and migrations.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema.
///
/// Safe to call on every startup: an up-to-date database is left untouched.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version > SCHEMA_VERSION {
        return Err(StorageError::Backend(BackendError::MigrationError {
            message: format!(
                "database schema version {} is newer than supported version {}",
                current_version, SCHEMA_VERSION
            ),
        }));
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| migration_error(format!("Failed to read schema_version: {}", e)))?;

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| migration_error(format!("Failed to clear schema_version: {}", e)))?;

    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
        .map_err(|e| migration_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1).
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    // AUTOINCREMENT keeps ids of deleted rows from being reused.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS doctor (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            address TEXT NOT NULL,
            city TEXT NOT NULL,
            pincode TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create doctor table: {}", e)))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_doctor_pincode ON doctor (pincode)",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create pincode index: {}", e)))?;

    Ok(())
}

fn migration_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'doctor'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_newer_schema_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        set_schema_version(&conn, SCHEMA_VERSION + 1).unwrap();

        let err = initialize_schema(&conn).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Backend(BackendError::MigrationError { .. })
        ));
    }

    #[test]
    fn test_unreadable_version_is_migration_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE schema_version (version TEXT NOT NULL)", [])
            .unwrap();
        conn.execute("INSERT INTO schema_version (version) VALUES ('one')", [])
            .unwrap();

        let err = initialize_schema(&conn).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Backend(BackendError::MigrationError { .. })
        ));

        let doctor_tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'doctor'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(doctor_tables, 0);
    }
}
