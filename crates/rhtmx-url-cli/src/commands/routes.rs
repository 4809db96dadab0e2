use anyhow::Result;
use colored::Colorize;
use rhtmx_url::placeholder_names;
use std::path::Path;

use super::load_table;

pub fn execute(config_path: &Path) -> Result<()> {
    let (_, table) = load_table(config_path)?;

    if table.is_empty() {
        println!("{}", "⚠ No routes configured".yellow());
        println!("Add a [routes] table to {}", config_path.display());
        return Ok(());
    }

    println!("{}", format!("{} route(s)", table.len()).green().bold());
    println!();

    let width = table.names().map(str::len).max().unwrap_or(0);
    for (name, pattern) in table.iter() {
        let params = placeholder_names(pattern);
        if params.is_empty() {
            println!("  {:width$}  {}", name.cyan(), pattern, width = width);
        } else {
            println!(
                "  {:width$}  {}  ({})",
                name.cyan(),
                pattern,
                params.join(", ").dimmed(),
                width = width
            );
        }
    }

    Ok(())
}
