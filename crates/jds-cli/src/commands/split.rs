//! Split command implementation

use anyhow::Result;
use jds_core::split_queries;

use crate::cli::{OutputFormat, SplitArgs};
use crate::commands::common::read_input;

/// Execute the split command
pub async fn execute(args: &SplitArgs) -> Result<()> {
    let script = read_input(&args.file)?;
    let statements = split_queries(&script);

    match args.output {
        OutputFormat::Text => {
            for statement in &statements {
                println!("{}", statement);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&statements)?);
        }
    }

    log::info!("Split into {} statement(s)", statements.len());
    Ok(())
}
