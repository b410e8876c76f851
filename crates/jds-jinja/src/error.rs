//! Error types for jds-jinja

use thiserror::Error;

/// Jinja templating errors
#[derive(Error, Debug)]
pub enum JinjaError {
    /// Template directory missing (J001)
    #[error("[J001] Templates path is not a directory: {path}")]
    InvalidTemplatesPath { path: String },

    /// Template not found (J002)
    #[error("[J002] Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template render error (J003)
    #[error("[J003] Jinja render error: {0}")]
    RenderError(String),
}

/// Result type alias for JinjaError
pub type JinjaResult<T> = Result<T, JinjaError>;

impl From<minijinja::Error> for JinjaError {
    fn from(err: minijinja::Error) -> Self {
        JinjaError::RenderError(format!("{:#}", err))
    }
}
