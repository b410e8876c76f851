//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::hook::DataHook;
use crate::result::QueryResult;
use crate::traits::Database;
use async_trait::async_trait;
use duckdb::types::Value as DuckValue;
use duckdb::Connection;
use serde_json::Value;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// DuckDB database backend
pub struct DuckDbBackend {
    conn: Mutex<Option<Connection>>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self::from_connection(conn))
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self::from_connection(conn))
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(Some(conn)),
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Option<Connection>>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    /// Execute SQL synchronously
    fn execute_sync(&self, sql: &str) -> DbResult<usize> {
        let guard = self.lock()?;
        let conn = guard.as_ref().ok_or(DbError::EngineDisposed)?;
        conn.execute(sql, [])
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))
    }

    /// Run a statement and collect all rows synchronously.
    ///
    /// DuckDB panics on `stmt.column_count()` before execution, so rows are
    /// collected via `query_map` first, then column metadata is read.
    fn query_sync(&self, sql: &str) -> DbResult<QueryResult> {
        let guard = self.lock()?;
        let conn = guard.as_ref().ok_or(DbError::EngineDisposed)?;

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))?;

        let rows: Vec<Vec<Value>> = stmt
            .query_map([], |row| {
                let col_count = row.as_ref().column_count();
                (0..col_count)
                    .map(|i| row.get::<_, DuckValue>(i).map(duck_to_json))
                    .collect()
            })
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))?
            .collect::<Result<Vec<_>, _>>()?;

        let column_count = stmt.column_count();
        let columns: Vec<String> = (0..column_count)
            .map(|i| {
                stmt.column_name(i)
                    .map_or("?".to_string(), |v| v.to_string())
            })
            .collect();

        Ok(QueryResult::new(columns, rows))
    }
}

/// Convert a DuckDB value into JSON.
///
/// Types without a natural JSON form are rendered with their debug text.
fn duck_to_json(value: DuckValue) -> Value {
    match value {
        DuckValue::Null => Value::Null,
        DuckValue::Boolean(b) => Value::Bool(b),
        DuckValue::TinyInt(n) => Value::from(n),
        DuckValue::SmallInt(n) => Value::from(n),
        DuckValue::Int(n) => Value::from(n),
        DuckValue::BigInt(n) => Value::from(n),
        DuckValue::UTinyInt(n) => Value::from(n),
        DuckValue::USmallInt(n) => Value::from(n),
        DuckValue::UInt(n) => Value::from(n),
        DuckValue::UBigInt(n) => Value::from(n),
        DuckValue::HugeInt(n) => match i64::try_from(n) {
            Ok(small) => Value::from(small),
            Err(_) => Value::String(n.to_string()),
        },
        DuckValue::Float(f) => Value::from(f64::from(f)),
        DuckValue::Double(f) => Value::from(f),
        DuckValue::Text(s) => Value::String(s),
        other => Value::String(format!("{:?}", other)),
    }
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn execute(&self, sql: &str) -> DbResult<usize> {
        self.execute_sync(sql)
    }

    async fn query(&self, sql: &str) -> DbResult<QueryResult> {
        self.query_sync(sql)
    }

    async fn close(&self) -> DbResult<()> {
        let mut guard = self.lock()?;
        if let Some(conn) = guard.take() {
            conn.close()
                .map_err(|(_, e)| DbError::ConnectionError(e.to_string()))?;
        }
        Ok(())
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

impl DataHook for DuckDbBackend {
    fn engine(&self) -> DbResult<&dyn Database> {
        Ok(self)
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
