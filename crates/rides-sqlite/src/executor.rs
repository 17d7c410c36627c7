//! StatementExecutor implementation for SQLite

use crate::connection::SqlitePool;
use crate::error::SqliteResult;
use async_trait::async_trait;
use rides_core::{Row, SqlValue, StatementExecutor, StorageError, StorageResult};
use rusqlite::types::{Value as SqliteValue, ValueRef};
use rusqlite::{params_from_iter, Connection};
use serde_json::{Number, Value};
use tracing::{debug, warn};

/// SQLite implementation of StatementExecutor
#[derive(Clone)]
pub struct SqliteExecutor {
    pool: SqlitePool,
}

impl SqliteExecutor {
    /// Create a new executor with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run `f` against the connection on the blocking thread pool.
    async fn blocking<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> SqliteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || pool.with_connection(f))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))?
            .map_err(|e| {
                warn!(error = %e, "Statement failed");
                e.into()
            })
    }
}

#[async_trait]
impl StatementExecutor for SqliteExecutor {
    async fn run(&self, statement: &str, params: Vec<SqlValue>) -> StorageResult<i64> {
        let statement = statement.to_string();
        debug!(%statement, params = params.len(), "run");

        self.blocking(move |conn| {
            conn.execute(&statement, params_from_iter(params.into_iter().map(to_sqlite)))?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn all(&self, statement: &str, params: Vec<SqlValue>) -> StorageResult<Vec<Row>> {
        let statement = statement.to_string();
        debug!(%statement, params = params.len(), "all");

        self.blocking(move |conn| {
            let mut stmt = conn.prepare(&statement)?;
            let columns: Vec<String> = stmt
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect();

            let mut rows = stmt.query(params_from_iter(params.into_iter().map(to_sqlite)))?;
            let mut result = Vec::new();
            while let Some(row) = rows.next()? {
                let mut record = Row::new();
                for (idx, column) in columns.iter().enumerate() {
                    record.insert(column.clone(), to_json(row.get_ref(idx)?));
                }
                result.push(record);
            }

            Ok(result)
        })
        .await
    }
}

fn to_sqlite(value: SqlValue) -> SqliteValue {
    match value {
        SqlValue::Null => SqliteValue::Null,
        SqlValue::Integer(i) => SqliteValue::Integer(i),
        SqlValue::Real(f) => SqliteValue::Real(f),
        SqlValue::Text(s) => SqliteValue::Text(s),
    }
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::String(hex::encode(bytes)),
    }
}
