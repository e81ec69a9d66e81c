use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by loaders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    #[error("plugin list is empty: no default plugin to select")]
    EmptyPluginList,
}

/// Errors raised while reading a plugin catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read plugin catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plugin catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
