//! jds-core - Core library for jds-tools
//!
//! This crate provides the SQL statement splitter, identifier and literal
//! quoting helpers, and the environment-backed [`Settings`] shared by the
//! database, templating and CLI crates.

pub mod config;
pub mod error;
pub mod sql_utils;

pub use config::{Settings, SnowflakeConfig};
pub use error::{CoreError, CoreResult};
pub use sql_utils::split_queries;
