//! Schema management and migrations

use crate::error::{SqliteError, SqliteResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

/// Schema version - increment when making schema changes
const SCHEMA_VERSION: i32 = 1;

/// Apply all pending migrations
pub fn apply_migrations(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = get_current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking migrations");

    if current_version < SCHEMA_VERSION {
        info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Applying schema migrations"
        );
        apply_migration_v1(conn)?;
    }

    Ok(())
}

/// Get current schema version
fn get_current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: Option<i32> = conn
        .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();

    Ok(version.unwrap_or(0))
}

fn record_migration(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO schema_migrations (version) VALUES (?)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: the Rides table
fn apply_migration_v1(conn: &Connection) -> SqliteResult<()> {
    debug!("Applying migration v1: Rides table");

    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply v1 schema: {}", e)))?;

    record_migration(conn, 1)?;
    info!("Migration v1 applied successfully");
    Ok(())
}

/// Initial schema SQL
const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS Rides (
    rideID INTEGER PRIMARY KEY AUTOINCREMENT,
    startLat REAL,
    startLong REAL,
    endLat REAL,
    endLong REAL,
    riderName TEXT,
    driverName TEXT,
    driverVehicle TEXT,
    created DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(conn: &Connection) -> Vec<String> {
        let mut stmt = conn.prepare("PRAGMA table_info(Rides)").unwrap();
        let rows = stmt.query_map([], |row| row.get::<_, String>(1)).unwrap();
        rows.filter_map(Result::ok).collect()
    }

    #[test]
    fn test_schema_applies_cleanly() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
        assert_eq!(
            columns(&conn),
            vec![
                "rideID",
                "startLat",
                "startLong",
                "endLat",
                "endLong",
                "riderName",
                "driverName",
                "driverVehicle",
                "created",
            ]
        );
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        apply_migrations(&conn).unwrap();
        conn.execute("INSERT INTO Rides (riderName) VALUES ('First')", [])
            .unwrap();
        apply_migrations(&conn).unwrap();

        let migrations: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(migrations, 1);

        let rides: i64 = conn
            .query_row("SELECT COUNT(*) FROM Rides", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rides, 1);
    }

    #[test]
    fn test_created_defaults_to_insert_time() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        conn.execute("INSERT INTO Rides (riderName) VALUES ('Rider')", [])
            .unwrap();
        let created: Option<String> = conn
            .query_row("SELECT created FROM Rides WHERE rideID = 1", [], |row| row.get(0))
            .unwrap();

        assert!(created.is_some());
    }

    #[test]
    fn test_ride_ids_increase() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        conn.execute("INSERT INTO Rides (riderName) VALUES ('a')", []).unwrap();
        conn.execute("INSERT INTO Rides (riderName) VALUES ('b')", []).unwrap();
        conn.execute("DELETE FROM Rides WHERE rideID = 2", []).unwrap();
        conn.execute("INSERT INTO Rides (riderName) VALUES ('c')", []).unwrap();

        // AUTOINCREMENT never reuses a deleted id
        assert_eq!(conn.last_insert_rowid(), 3);
    }
}
