//! Render command implementation

use anyhow::{Context, Result};
use jds_jinja::JinjaHook;

use crate::cli::{GlobalArgs, RenderArgs};
use crate::commands::common::{load_settings, parse_vars, resolve_templates_dir};

/// Execute the render command
pub async fn execute(args: &RenderArgs, global: &GlobalArgs) -> Result<()> {
    let settings = load_settings(global)?;
    let templates_dir = resolve_templates_dir(args.templates_dir.as_ref(), &settings)
        .context("No templates directory: pass --templates-dir or set JDS_TEMPLATES_PATH")?;

    let vars = parse_vars(args.vars.as_deref())?;
    let hook = JinjaHook::with_vars(&templates_dir, vars.clone())?;
    let rendered = hook.render(&args.name, &vars)?;

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
