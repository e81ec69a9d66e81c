//! `list` and `default` subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use plugdash_config::PlugdashConfig;
use plugdash_plugins::{read_catalog, BackendList, Loader, TransformDefaultLoader};

/// The catalog given on the command line, else the configured one.
pub fn resolve_catalog(arg: Option<PathBuf>, config: &PlugdashConfig) -> Result<PathBuf> {
    arg.or_else(|| config.catalog_path().cloned())
        .context("No plugin catalog given and none configured")
}

fn read(path: &Path) -> Result<BackendList<Value>> {
    read_catalog(path).with_context(|| format!("Failed to load plugins from {}", path.display()))
}

/// Render the plugin list a panel would offer.
pub fn list_plugins(catalog: &Path) -> Result<String> {
    let plugins = read(catalog)?;
    let loaded = TransformDefaultLoader.load_plugin_list(&plugins);
    info!(count = loaded.len(), "Listing plugins");
    Ok(serde_json::to_string_pretty(loaded)?)
}

/// Render the value of the default plugin.
pub fn default_plugin(catalog: &Path) -> Result<String> {
    let plugins = read(catalog)?;
    let value = TransformDefaultLoader
        .load_default_plugin(&plugins)
        .with_context(|| format!("No default plugin in {}", catalog.display()))?;
    Ok(serde_json::to_string_pretty(value)?)
}
