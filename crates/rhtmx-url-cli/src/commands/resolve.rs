use anyhow::{Context, Result};
use rhtmx_url::{RouteArgs, UrlResolver};
use std::path::Path;

use super::load_table;

pub fn execute(
    config_path: &Path,
    name: &str,
    values: Vec<String>,
    named: Vec<(String, String)>,
    json: Option<&str>,
) -> Result<()> {
    let (_, table) = load_table(config_path)?;
    let resolver = UrlResolver::new(table);
    let args = build_args(values, named, json)?;

    let url = resolver
        .resolve_url(name, args.as_ref())
        .with_context(|| format!("Failed to resolve route '{}'", name))?;

    println!("{}", url);

    Ok(())
}

/// Turns command-line input into an argument set
///
/// No values at all means "no argument", so static routes resolve.
pub fn build_args(
    values: Vec<String>,
    named: Vec<(String, String)>,
    json: Option<&str>,
) -> Result<Option<RouteArgs>> {
    if let Some(raw) = json {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("--json is not valid JSON")?;
        return Ok(RouteArgs::from_json(&value)?);
    }

    match (values.is_empty(), named.is_empty()) {
        (true, true) => Ok(None),
        (false, true) => Ok(Some(RouteArgs::positional(values))),
        (true, false) => Ok(Some(RouteArgs::named(named))),
        (false, false) => {
            anyhow::bail!("Use either positional values or --named, not both")
        }
    }
}

/// clap value parser for `KEY=VALUE`
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}
