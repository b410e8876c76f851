//! Settings loaded from the environment and `.env` files

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default `.env` file looked up by [`Settings::load`]
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Snowflake connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnowflakeConfig {
    /// Account identifier, e.g. `xy12345.us-east-1`
    pub account: String,
    /// Login name
    pub user: String,
    /// Login password
    pub password: String,
    /// Default database
    pub database: String,
    /// Default warehouse
    pub warehouse: String,
    /// Role to assume, if not the user's default
    #[serde(default)]
    pub role: Option<String>,
}

impl SnowflakeConfig {
    /// Basic connection parameters as a dictionary.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("account".to_string(), self.account.clone()),
            ("user".to_string(), self.user.clone()),
            ("password".to_string(), self.password.clone()),
            ("database".to_string(), self.database.clone()),
        ])
    }
}

/// Toolkit settings
///
/// Values come from `SNOWFLAKE_*` and `JDS_*` variables. Unknown variables
/// are ignored and missing ones fall back to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Snowflake connection settings
    pub snowflake: SnowflakeConfig,

    /// Directory holding Jinja templates
    #[serde(default)]
    pub templates_path: Option<PathBuf>,
}

impl Settings {
    /// Build settings from key/value pairs. Later pairs override earlier ones.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Settings::default();
        for (key, value) in vars {
            settings.apply(key.as_ref(), value.into());
        }
        settings
    }

    /// Build settings from the process environment only
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build settings from an env file, with process variables taking precedence
    pub fn from_env_file(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::EnvFileNotFound {
                path: path.display().to_string(),
            });
        }

        let parse_err = |e: dotenvy::Error| CoreError::EnvFileParse {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let file_vars = dotenvy::from_path_iter(path)
            .map_err(parse_err)?
            .collect::<Result<Vec<(String, String)>, _>>()
            .map_err(parse_err)?;

        log::debug!(
            "Loaded {} variables from {}",
            file_vars.len(),
            path.display()
        );

        Ok(Self::from_vars(file_vars.into_iter().chain(std::env::vars())))
    }

    /// Load settings from `./.env` when present, otherwise from the environment
    pub fn load() -> CoreResult<Self> {
        let path = Path::new(DEFAULT_ENV_FILE);
        if path.exists() {
            Self::from_env_file(path)
        } else {
            Ok(Self::from_env())
        }
    }

    fn apply(&mut self, key: &str, value: String) {
        match key {
            "SNOWFLAKE_ACCOUNT" => self.snowflake.account = value,
            "SNOWFLAKE_USER" => self.snowflake.user = value,
            "SNOWFLAKE_PASSWORD" => self.snowflake.password = value,
            "SNOWFLAKE_DATABASE" => self.snowflake.database = value,
            "SNOWFLAKE_WAREHOUSE" => self.snowflake.warehouse = value,
            "SNOWFLAKE_ROLE" => self.snowflake.role = non_empty(value),
            "JDS_TEMPLATES_PATH" => self.templates_path = non_empty(value).map(PathBuf::from),
            _ => {}
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
