//! Helpers shared by several commands

use anyhow::{bail, Context, Result};
use jds_core::Settings;
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// Load settings from `--env-file`, or `./.env`, or the environment
pub(crate) fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let settings = match &global.env_file {
        Some(path) => Settings::from_env_file(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}

/// Read a file, or stdin when `path` is `-`
pub(crate) fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

/// Parse `--vars` as a JSON object
pub(crate) fn parse_vars(vars: Option<&str>) -> Result<HashMap<String, serde_json::Value>> {
    match vars {
        None => Ok(HashMap::new()),
        Some(raw) => serde_json::from_str(raw).context("--vars must be a JSON object"),
    }
}

/// Pick the templates directory from the flag, then settings
pub(crate) fn resolve_templates_dir(
    flag: Option<&PathBuf>,
    settings: &Settings,
) -> Option<PathBuf> {
    flag.cloned().or_else(|| settings.templates_path.clone())
}

/// Parse `Name: value` header flags into a map
pub(crate) fn parse_headers(raw: &[String]) -> Result<HashMap<String, String>> {
    let mut headers = HashMap::with_capacity(raw.len());
    for entry in raw {
        let Some((name, value)) = entry.split_once(':') else {
            bail!("Invalid header '{}': expected 'Name: value'", entry);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid header '{}': empty name", entry);
        }
        headers.insert(name.to_string(), value.trim().to_string());
    }
    Ok(headers)
}

/// Calculate column widths for a table given headers and row data.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Columns are left-aligned and separated by two spaces, with a dashed
/// separator under the header row.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  "));

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  "));
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
