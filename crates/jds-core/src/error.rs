//! Error types for jds-core

use thiserror::Error;

/// Core error type for jds-tools
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: .env file not found
    #[error("[C001] Env file not found: {path}")]
    EnvFileNotFound { path: String },

    /// C002: .env file could not be parsed
    #[error("[C002] Failed to parse env file {path}: {message}")]
    EnvFileParse { path: String, message: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
