//! Database engine trait definition

use crate::error::DbResult;
use crate::result::QueryResult;
use async_trait::async_trait;

/// A connection engine that runs single SQL statements.
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a statement that modifies data, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute a statement and collect its rows
    async fn query(&self, sql: &str) -> DbResult<QueryResult>;

    /// Release the underlying connection. Later calls fail.
    async fn close(&self) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
