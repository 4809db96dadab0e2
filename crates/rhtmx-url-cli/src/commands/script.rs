use anyhow::{Context, Result};
use rhtmx_url::{render_router_script, render_router_tag};
use std::path::Path;

use super::load_table;

pub fn execute(config_path: &Path, global: Option<String>, pretty: bool, tag: bool) -> Result<()> {
    let (config, table) = load_table(config_path)?;

    let mut options = config.script_options();
    if let Some(global) = global {
        options.global_name = global;
    }
    if pretty {
        options.minify = false;
    }

    let output = if tag {
        render_router_tag(&table, &options)
    } else {
        render_router_script(&table, &options)
    }
    .context("Failed to render router script")?;

    println!("{}", output);

    Ok(())
}
