// File: src/config.rs
// Purpose: Route table and router script configuration from rhtmx-url.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::script::ScriptOptions;
use crate::table::RouteTable;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "rhtmx-url.toml";

/// URL configuration
///
/// ```toml
/// [routes]
/// home = "/"
/// "post.show" = "/users/{int:id}/posts/{postId}"
///
/// [script]
/// global_name = "routes"
/// minify = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UrlConfig {
    /// Route name → URL pattern
    #[serde(default)]
    pub routes: BTreeMap<String, String>,

    #[serde(default)]
    pub script: ScriptConfig,
}

/// Page-embedded router script settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Name of the `window` property holding the route table
    #[serde(default = "default_global_name")]
    pub global_name: String,

    /// Emit compact JSON (default: true)
    #[serde(default = "default_true")]
    pub minify: bool,
}

fn default_global_name() -> String {
    "routes".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            global_name: default_global_name(),
            minify: true,
        }
    }
}

impl UrlConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default (empty) configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from the default path (./rhtmx-url.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: UrlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Freezes the configured routes into a table
    pub fn route_table(&self) -> RouteTable {
        RouteTable::builder().routes(self.routes.clone()).build()
    }

    /// Script options from the `[script]` section
    pub fn script_options(&self) -> ScriptOptions {
        ScriptOptions {
            global_name: self.script.global_name.clone(),
            minify: self.script.minify,
        }
    }
}
