//! Process logging

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rides_config::LoggingConfig;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Daily log file name, e.g. `server-2024-03-01.log`.
pub fn log_file_name(date: NaiveDate) -> String {
    format!("server-{}.log", date.format("%Y-%m-%d"))
}

pub fn log_file_path(directory: &Path, date: NaiveDate) -> PathBuf {
    directory.join(log_file_name(date))
}

/// `RUST_LOG` wins over the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level: {}", config.level)),
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).with_context(|| {
                format!("Failed to create log directory {}", directory.display())
            })?;

            let path = log_file_path(directory, chrono::Utc::now().date_naive());
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
