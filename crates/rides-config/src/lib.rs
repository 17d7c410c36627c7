//! # Rides Configuration
//!
//! Typed configuration for the rides service, loaded from an optional TOML
//! file and then overridden from the environment.
//!
//! ```rust,ignore
//! use rides_config::RidesConfig;
//!
//! let config = RidesConfig::load(Some("rides.toml".as_ref()))?.with_env_overrides()?;
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod config;
mod error;
mod loader;

pub use config::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::{ENV_DB_PATH, ENV_HOST, ENV_LOG_LEVEL, ENV_PORT};
