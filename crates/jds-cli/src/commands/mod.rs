//! CLI command implementations

pub(crate) mod common;
pub(crate) mod http;
pub(crate) mod render;
pub(crate) mod run;
pub(crate) mod settings;
pub(crate) mod split;
