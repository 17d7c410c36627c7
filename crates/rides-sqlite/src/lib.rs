//! SQLite storage adapter for the rides service
//!
//! This crate implements [`rides_core::StatementExecutor`] on top of a single
//! `rusqlite` connection.
//!
//! ## Features
//!
//! - **Bound parameters only**: statement text and values never mix
//! - **Schema on open**: the `Rides` table is created when the pool opens
//! - **WAL Mode**: enabled for file-backed databases
//! - **Non-blocking**: driver calls run on the blocking thread pool
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rides_sqlite::{SqliteConfig, SqliteExecutor, SqlitePool};
//! use rides_core::RideRepository;
//! use std::sync::Arc;
//!
//! let pool = SqlitePool::new(SqliteConfig::memory())?;
//! let repository = RideRepository::new(Arc::new(SqliteExecutor::new(pool)));
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod executor;
pub mod schema;

// Re-exports
pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
pub use executor::SqliteExecutor;
