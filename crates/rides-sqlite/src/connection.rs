//! SQLite connection management
//!
//! Uses a simple Arc<Mutex<Connection>> pattern. Every statement runs on the
//! same connection, so a ride inserted by one call is visible to the next.

use crate::config::SqliteConfig;
use crate::error::{SqliteError, SqliteResult};
use crate::schema;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use tracing::{debug, info};

/// Thread-safe SQLite connection wrapper
#[derive(Clone)]
pub struct SqlitePool {
    conn: Arc<Mutex<Connection>>,
    config: SqliteConfig,
}

impl SqlitePool {
    /// Open the database, configure it and create the schema.
    pub fn new(config: SqliteConfig) -> SqliteResult<Self> {
        info!(path = ?config.path, "Opening SQLite database");

        let conn = if config.is_memory() {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SqliteError::Connection(format!("Failed to create directory: {}", e))
                })?;
            }
            Connection::open(&config.path)?
        };

        let sqlite_pool = Self {
            conn: Arc::new(Mutex::new(conn)),
            config,
        };

        sqlite_pool.initialize()?;

        Ok(sqlite_pool)
    }

    /// Create an in-memory pool for testing
    pub fn memory() -> SqliteResult<Self> {
        Self::new(SqliteConfig::memory())
    }

    pub fn config(&self) -> &SqliteConfig {
        &self.config
    }

    /// Execute a closure with the connection
    pub fn with_connection<F, T>(&self, f: F) -> SqliteResult<T>
    where
        F: FnOnce(&Connection) -> SqliteResult<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    fn initialize(&self) -> SqliteResult<()> {
        self.with_connection(|conn| {
            self.configure_pragmas(conn)?;
            schema::apply_migrations(conn)?;

            info!("SQLite database initialized");
            Ok(())
        })
    }

    fn configure_pragmas(&self, conn: &Connection) -> SqliteResult<()> {
        debug!("Configuring SQLite pragmas");

        // WAL is meaningless for :memory:
        if self.config.wal_mode && !self.config.is_memory() {
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
            conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
        }

        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {};",
            self.config.busy_timeout_ms
        ))?;

        conn.execute_batch("PRAGMA temp_store = MEMORY;")?;

        Ok(())
    }
}
