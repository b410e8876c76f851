//! jds-jinja - Jinja templating hook for jds-tools
//!
//! [`JinjaHook`] loads templates from a directory and renders them with a
//! serializable context. Templates can call `var()`, `env()` and `log()`.

pub mod error;
mod functions;
pub mod hook;

pub use error::{JinjaError, JinjaResult};
pub use hook::JinjaHook;
