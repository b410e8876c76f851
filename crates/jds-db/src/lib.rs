//! jds-db - Database hooks for jds-tools
//!
//! This crate provides the `Database` engine trait, the `DataHook` trait
//! that layers script execution and uploads on top of an engine, a DuckDB
//! backend, and the Snowflake hook.

pub mod duckdb;
pub mod error;
pub mod hook;
pub mod result;
pub mod snowflake;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use hook::DataHook;
pub use result::QueryResult;
pub use snowflake::{Connector, SnowflakeHook, SnowflakeUrl};
pub use traits::Database;
