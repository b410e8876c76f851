//! Globals registered on every hook environment.
//!
//! `var(name[, fallback])` reads the hook's variables, `env(name[, fallback])`
//! reads the process environment and `log(msg)` writes to the application log.

use minijinja::value::Value;
use minijinja::{Error, ErrorKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolve a lookup, falling back to the template-supplied value when given.
fn resolve(
    found: Option<Value>,
    fallback: Option<Value>,
    kind: ErrorKind,
    missing: impl FnOnce() -> String,
) -> Result<Value, Error> {
    found
        .or(fallback)
        .ok_or_else(|| Error::new(kind, missing()))
}

/// `{{ var('start_date') }}` or `{{ var('region', 'us') }}`
pub(crate) fn make_var_fn(
    vars: HashMap<String, serde_json::Value>,
) -> impl Fn(&str, Option<Value>) -> Result<Value, Error> + Send + Sync + Clone + 'static {
    let vars = Arc::new(vars);
    move |name: &str, fallback: Option<Value>| {
        resolve(
            vars.get(name).map(Value::from_serialize),
            fallback,
            ErrorKind::UndefinedError,
            || format!("unknown template variable `{name}`"),
        )
    }
}

/// `{{ env('SNOWFLAKE_ROLE', 'PUBLIC') }}`
pub(crate) fn make_env_fn(
) -> impl Fn(&str, Option<Value>) -> Result<Value, Error> + Send + Sync + Clone + 'static {
    |name: &str, fallback: Option<Value>| {
        resolve(
            std::env::var(name).ok().map(Value::from),
            fallback,
            ErrorKind::InvalidOperation,
            || format!("environment has no `{name}`"),
        )
    }
}

pub(crate) fn make_log_fn() -> impl Fn(&str) -> String + Send + Sync + Clone + 'static {
    |msg: &str| {
        log::info!(target: "jds_jinja::template", "{msg}");
        String::new()
    }
}

#[cfg(test)]
#[path = "functions_test.rs"]
mod tests;
