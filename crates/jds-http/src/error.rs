//! Error types for jds-http

use thiserror::Error;

/// HTTP helper errors
#[derive(Error, Debug)]
pub enum HttpError {
    /// Mismatched input lists (H001)
    #[error("[H001] Expected {expected} header maps, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Raw payload is not JSON (H002)
    #[error("[H002] Payload {index} is not a valid JSON string: {message}")]
    InvalidJsonPayload { index: usize, message: String },

    /// Header name or value rejected (H003)
    #[error("[H003] Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    /// Transport or protocol failure (H004)
    #[error("[H004] Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type alias for HttpError
pub type HttpResult<T> = Result<T, HttpError>;
