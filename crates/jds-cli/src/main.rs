//! jds-tools CLI - split, render, and run SQL scripts and batch HTTP requests

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use commands::{http, render, run, settings, split};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Split(args) => split::execute(args).await,
        cli::Commands::Render(args) => render::execute(args, &cli.global).await,
        cli::Commands::Run(args) => run::execute(args, &cli.global).await,
        cli::Commands::Get(args) => http::execute_get(args).await,
        cli::Commands::Post(args) => http::execute_post(args).await,
        cli::Commands::Settings => settings::execute(&cli.global).await,
    }
}

/// Route `log` records from the library crates to stderr.
///
/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
