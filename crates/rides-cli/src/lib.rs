//! Rides service bootstrap
//!
//! Wires configuration, storage, the repository and the HTTP server together.
//! `main.rs` only parses arguments and installs logging before calling
//! [`serve`].

pub mod cli;
pub mod logging;

use anyhow::{Context, Result};
use rides_config::{RidesConfig, StorageConfig};
use rides_core::RideRepository;
use rides_sqlite::{SqliteConfig, SqliteExecutor, SqlitePool};
use rides_web::{AppState, StatusMode};
use std::sync::Arc;
use tracing::info;

/// File, then environment, then command-line flags.
pub fn load_config(cli: &cli::Cli) -> Result<RidesConfig> {
    let config = RidesConfig::load(cli.config.as_deref())?.with_env_overrides()?;
    Ok(cli.apply(config))
}

pub fn sqlite_config(storage: &StorageConfig) -> SqliteConfig {
    SqliteConfig {
        path: storage.path.clone(),
        wal_mode: storage.wal_mode,
        busy_timeout_ms: storage.busy_timeout_ms,
    }
}

/// Open storage and build the application state.
pub fn build_state(config: &RidesConfig) -> Result<AppState> {
    let pool = SqlitePool::new(sqlite_config(&config.storage))
        .context("Failed to open ride storage")?;
    let repository = RideRepository::new(Arc::new(SqliteExecutor::new(pool)));

    Ok(AppState::new(
        repository,
        StatusMode::from_strict(config.server.strict_status_codes),
    ))
}

/// Run the HTTP server until shutdown.
pub async fn serve(config: RidesConfig) -> Result<()> {
    let state = build_state(&config)?;
    info!(
        storage = %config.storage.path.display(),
        strict_status_codes = config.server.strict_status_codes,
        "Ride storage ready"
    );

    rides_web::start_server(&config.server, state).await?;
    Ok(())
}
