//! Loading from file and environment

use crate::config::RidesConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_HOST: &str = "RIDES_HOST";
pub const ENV_PORT: &str = "RIDES_PORT";
pub const ENV_DB_PATH: &str = "RIDES_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "RIDES_LOG_LEVEL";

impl RidesConfig {
    /// Load from `path`, or defaults when no path is given.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    /// Apply `RIDES_*` variables from the process environment.
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
        }

        if let Some(path) = lookup(ENV_DB_PATH) {
            self.storage.path = PathBuf::from(path);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(self)
    }
}
