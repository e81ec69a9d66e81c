//! `plugdash-config`: runtime configuration for the plugdash tools.
//!
//! Provides:
//! - Typed config schema (logging, plugin catalog location)
//! - YAML loading from the config directory
//! - Default value application

pub mod defaults;
pub mod io;
pub mod schema;

pub use defaults::apply_all_defaults;
pub use io::{config_dir, config_file_path, load_config};
pub use schema::{CatalogConfig, LoggingConfig, PlugdashConfig};

use anyhow::Result;
use std::path::Path;

/// Load a config file and apply defaults.
///
/// Relative paths inside the file resolve against the file's directory.
pub async fn load_and_prepare(path: &Path) -> Result<PlugdashConfig> {
    let config = load_config(path).await?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(apply_all_defaults(config, base))
}
