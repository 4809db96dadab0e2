pub mod resolve;
pub mod routes;
pub mod script;

use anyhow::{Context, Result};
use rhtmx_url::{RouteTable, UrlConfig};
use std::path::Path;

/// Loads the config file and freezes its routes
pub fn load_table(config_path: &Path) -> Result<(UrlConfig, RouteTable)> {
    let config = UrlConfig::load(config_path)
        .with_context(|| format!("Failed to load routes from {:?}", config_path))?;
    let table = config.route_table();

    tracing::debug!(routes = table.len(), path = ?config_path, "route table loaded");

    Ok((config, table))
}
