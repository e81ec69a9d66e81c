//! plugdash configuration schema, typed for serde YAML deserialization.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugdashConfig {
    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Where the backend plugin list is read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `plugdash_plugins=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for rolling JSON log files. Console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl PlugdashConfig {
    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.logging.as_ref().and_then(|l| l.dir.as_ref())
    }

    pub fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog.as_ref().and_then(|c| c.path.as_ref())
    }
}
