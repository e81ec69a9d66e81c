//! Config file location and loading.

use crate::schema::PlugdashConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the plugdash config directory.
/// Priority: `PLUGDASH_CONFIG_DIR` env > `~/.plugdash/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PLUGDASH_CONFIG_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    match dirs::home_dir() {
        Some(home) => home.join(".plugdash"),
        None => PathBuf::from(".plugdash"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist (first run).
pub async fn load_config(path: &Path) -> Result<PlugdashConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(PlugdashConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file is treated like a missing one.
    if raw.trim().is_empty() {
        return Ok(PlugdashConfig::default());
    }

    let config: PlugdashConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}
