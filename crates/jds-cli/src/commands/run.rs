//! Run command implementation

use anyhow::{Context, Result};
use jds_db::{DataHook, Database, DbResult, DuckDbBackend, QueryResult};
use jds_jinja::JinjaHook;
use std::path::Path;

use crate::cli::{GlobalArgs, OutputFormat, RunArgs};
use crate::commands::common::{
    load_settings, parse_vars, print_table, read_input, resolve_templates_dir,
};

/// Execute the run command
pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let mut script = read_input(&args.file)?;

    if args.render {
        let settings = load_settings(global)?;
        let templates_dir = resolve_templates_dir(args.templates_dir.as_ref(), &settings)
            .unwrap_or_else(|| script_dir(&args.file));
        let vars = parse_vars(args.vars.as_deref())?;
        let hook = JinjaHook::with_vars(&templates_dir, vars.clone())?;
        script = hook
            .render_str(&script, &vars)
            .with_context(|| format!("Failed to render {}", args.file))?;
    }

    let db = DuckDbBackend::new(&args.database)
        .with_context(|| format!("Failed to open database {}", args.database))?;

    let outcome = db.run_script(&script).await;
    let results = settle(outcome, db.close().await)?;

    match args.output {
        OutputFormat::Text => {
            for (idx, result) in results.iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                print_result(result);
            }
            println!();
            println!("Ran {} statement(s)", results.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

/// Combine the script outcome with the close result.
///
/// A script failure wins over a close failure, which is then only logged.
fn settle<T>(outcome: DbResult<T>, closed: DbResult<()>) -> Result<T> {
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err).context("Failed to close database"),
        (Err(script_err), Ok(())) => Err(script_err.into()),
        (Err(script_err), Err(close_err)) => {
            log::warn!("Failed to close database after script error: {}", close_err);
            Err(script_err.into())
        }
    }
}

/// Directory containing the script, for relative includes
fn script_dir(file: &str) -> std::path::PathBuf {
    Path::new(file)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ".".into())
}

fn print_result(result: &QueryResult) {
    if result.columns.is_empty() {
        println!("OK");
        return;
    }
    let headers: Vec<&str> = result.columns.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    print_table(&headers, &rows);
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "NULL".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
