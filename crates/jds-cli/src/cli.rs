//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// jds - SQL script, template, and HTTP batch toolkit
#[derive(Parser, Debug)]
#[command(name = "jds")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file to load settings from (default: ./.env when present)
    #[arg(short, long, global = true, env = "JDS_ENV_FILE")]
    pub env_file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a SQL script into statements
    Split(SplitArgs),

    /// Render a Jinja template
    Render(RenderArgs),

    /// Run a SQL script statement by statement against DuckDB
    Run(RunArgs),

    /// Send GET requests concurrently
    Get(GetArgs),

    /// Send POST requests concurrently to one URL
    Post(PostArgs),

    /// Show loaded settings with secrets masked
    Settings,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Script file, or `-` for stdin
    pub file: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template name, relative to the templates directory
    pub name: String,

    /// Templates directory (default: JDS_TEMPLATES_PATH)
    #[arg(short, long)]
    pub templates_dir: Option<PathBuf>,

    /// Template variables as a JSON object
    #[arg(long)]
    pub vars: Option<String>,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file, or `-` for stdin
    pub file: String,

    /// DuckDB database path
    #[arg(short, long, default_value = ":memory:")]
    pub database: String,

    /// Render the script as a Jinja template before running it
    #[arg(long)]
    pub render: bool,

    /// Templates directory used for includes when rendering
    #[arg(short, long)]
    pub templates_dir: Option<PathBuf>,

    /// Template variables as a JSON object
    #[arg(long)]
    pub vars: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// URLs to fetch
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Header sent with every request, as `Name: value`
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}

/// Arguments for the post command
#[derive(Args, Debug)]
pub struct PostArgs {
    /// URL to post to
    pub url: String,

    /// JSON body; repeat for one request per body
    #[arg(short, long = "data", required = true)]
    pub data: Vec<String>,

    /// Header sent with every request, as `Name: value`
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
