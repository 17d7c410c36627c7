//! SQLite connection settings

use std::path::{Path, PathBuf};

const MEMORY_PATH: &str = ":memory:";

/// Settings applied when the connection is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteConfig {
    /// Database file, or `:memory:` for a process-local store
    pub path: PathBuf,
    /// Write-ahead logging (file databases only)
    pub wal_mode: bool,
    pub busy_timeout_ms: u32,
}

impl SqliteConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// In-memory database; rides do not survive the process.
    pub fn memory() -> Self {
        Self::new(MEMORY_PATH)
    }

    pub fn is_memory(&self) -> bool {
        self.path.as_os_str() == MEMORY_PATH
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(MEMORY_PATH),
            wal_mode: true,
            busy_timeout_ms: 5000,
        }
    }
}
