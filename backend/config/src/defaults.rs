//! Config defaults: fills unset values after a config is parsed.

use std::path::Path;

use crate::schema::{CatalogConfig, LoggingConfig, PlugdashConfig};

/// Default `tracing` filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Catalog file name looked up in the config directory.
pub const DEFAULT_CATALOG_FILE: &str = "plugins.json";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: PlugdashConfig, config_dir: &Path) -> PlugdashConfig {
    let config = apply_logging_defaults(config);
    apply_catalog_defaults(config, config_dir)
}

fn apply_logging_defaults(mut config: PlugdashConfig) -> PlugdashConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    config
}

/// Relative catalog paths resolve against the config directory.
fn apply_catalog_defaults(mut config: PlugdashConfig, config_dir: &Path) -> PlugdashConfig {
    let catalog = config.catalog.get_or_insert_with(CatalogConfig::default);
    catalog.path = Some(match catalog.path.take() {
        Some(p) if p.is_relative() => config_dir.join(p),
        Some(p) => p,
        None => config_dir.join(DEFAULT_CATALOG_FILE),
    });
    config
}
