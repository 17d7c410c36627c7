//! Storage seam
//!
//! Backends execute parameterized statements on behalf of the repository.
//! Parameters are always bound by the backend, never spliced into the
//! statement text.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// A result row: column name to JSON value, in column order.
pub type Row = Map<String, Value>;

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Error type for storage operations
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage task failed: {0}")]
    Task(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Executes statements with bound parameters.
///
/// Both operations may suspend while the engine works; implementations backed
/// by a blocking driver must move the work off the async runtime.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    /// Execute a mutating statement and return the id of the last inserted row.
    async fn run(&self, statement: &str, params: Vec<SqlValue>) -> StorageResult<i64>;

    /// Execute a query and return its rows in result order.
    async fn all(&self, statement: &str, params: Vec<SqlValue>) -> StorageResult<Vec<Row>>;
}
