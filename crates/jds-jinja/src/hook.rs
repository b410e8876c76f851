//! Directory-backed Jinja environment

use crate::error::{JinjaError, JinjaResult};
use crate::functions::{make_env_fn, make_log_fn, make_var_fn};
use minijinja::{path_loader, Environment, ErrorKind};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Renders templates stored under a directory
pub struct JinjaHook {
    templates_path: PathBuf,
    env: Environment<'static>,
}

impl JinjaHook {
    /// Create a hook for `templates_path`, which must be an existing directory
    pub fn new(templates_path: impl AsRef<Path>) -> JinjaResult<Self> {
        Self::with_vars(templates_path, HashMap::new())
    }

    /// Create a hook whose templates can read `vars` through `var()`
    pub fn with_vars(
        templates_path: impl AsRef<Path>,
        vars: HashMap<String, serde_json::Value>,
    ) -> JinjaResult<Self> {
        let templates_path = templates_path.as_ref().to_path_buf();
        if !templates_path.is_dir() {
            return Err(JinjaError::InvalidTemplatesPath {
                path: templates_path.display().to_string(),
            });
        }

        let mut env = Environment::new();
        env.set_loader(path_loader(&templates_path));
        env.add_function("var", make_var_fn(vars));
        env.add_function("env", make_env_fn());
        env.add_function("log", make_log_fn());

        log::debug!("Jinja templates loaded from {}", templates_path.display());

        Ok(Self {
            templates_path,
            env,
        })
    }

    /// Directory templates are loaded from
    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }

    /// Render the template file `name` with `context`
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> JinjaResult<String> {
        let template = self.env.get_template(name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                JinjaError::TemplateNotFound {
                    name: name.to_string(),
                }
            } else {
                JinjaError::from(e)
            }
        })?;
        Ok(template.render(context)?)
    }

    /// Render an inline template source with `context`
    pub fn render_str<S: Serialize>(&self, source: &str, context: S) -> JinjaResult<String> {
        Ok(self.env.render_str(source, context)?)
    }
}

#[cfg(test)]
#[path = "hook_test.rs"]
mod tests;
