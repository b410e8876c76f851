//! Data hooks: script execution, fetching, and uploads over an engine

use crate::error::{DbError, DbResult};
use crate::result::QueryResult;
use crate::traits::Database;
use async_trait::async_trait;
use jds_core::sql_utils::{quote_ident, quote_qualified, split_queries, sql_literal};

/// A hook that owns (or is) a database engine.
///
/// Only [`DataHook::engine`] is required; fetching, script execution and
/// uploads are shared by every hook.
#[async_trait]
pub trait DataHook: Send + Sync {
    /// The live engine, or [`DbError::EngineDisposed`] once released
    fn engine(&self) -> DbResult<&dyn Database>;

    /// Run a query and return its rows.
    ///
    /// Failures are logged and yield an empty result.
    async fn fetch_data(&self, query: &str) -> QueryResult {
        let result = match self.engine() {
            Ok(engine) => engine.query(query).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Error trying to fetch data. Details: {}", e);
                QueryResult::empty()
            }
        }
    }

    /// Split a multi-statement script and run each statement in order.
    ///
    /// Stops at the first failing statement.
    async fn run_script(&self, script: &str) -> DbResult<Vec<QueryResult>> {
        let engine = self.engine()?;
        let statements = split_queries(script);
        log::debug!(
            "Running {} statement(s) on {}",
            statements.len(),
            engine.db_type()
        );

        let mut results = Vec::with_capacity(statements.len());
        for (idx, statement) in statements.iter().enumerate() {
            log::debug!("[{}/{}] {}", idx + 1, statements.len(), statement);
            match engine.query(statement).await {
                Ok(rows) => results.push(rows),
                Err(e) => {
                    log::error!("Statement {} failed: {}", idx + 1, e);
                    return Err(e);
                }
            }
        }
        Ok(results)
    }

    /// Insert every row of `data` into an existing table.
    ///
    /// Returns the number of rows inserted.
    async fn upload(&self, table: &str, data: &QueryResult) -> DbResult<usize> {
        let sql = match build_insert(table, data)? {
            Some(sql) => sql,
            None => return Ok(0),
        };
        let engine = self.engine()?;
        log::debug!("Uploading {} row(s) into {}", data.len(), table);
        engine.execute(&sql).await
    }
}

/// Build a multi-row INSERT for `data`, or `None` when there is nothing to insert.
pub(crate) fn build_insert(table: &str, data: &QueryResult) -> DbResult<Option<String>> {
    let invalid = |reason: String| DbError::InvalidUpload {
        table: table.to_string(),
        reason,
    };

    if data.is_empty() {
        return Ok(None);
    }
    if data.columns.is_empty() {
        return Err(invalid("data has rows but no columns".to_string()));
    }

    let mut values = Vec::with_capacity(data.len());
    for (idx, row) in data.rows.iter().enumerate() {
        if row.len() != data.columns.len() {
            return Err(invalid(format!(
                "row {} has {} values, expected {}",
                idx,
                row.len(),
                data.columns.len()
            )));
        }
        let literals: Vec<String> = row.iter().map(sql_literal).collect();
        values.push(format!("({})", literals.join(", ")));
    }

    let columns: Vec<String> = data.columns.iter().map(|c| quote_ident(c)).collect();

    Ok(Some(format!(
        "INSERT INTO {} ({}) VALUES {}",
        quote_qualified(table),
        columns.join(", "),
        values.join(", ")
    )))
}

#[cfg(test)]
#[path = "hook_test.rs"]
mod tests;
