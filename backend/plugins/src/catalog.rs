//! Plugin catalog: the backend's plugin list as a JSON document.
//!
//! A catalog is a JSON array of `{ "label": ..., "value": ... }` objects.
//! Entries are kept exactly as written; an empty array is a valid catalog.

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

use crate::descriptor::BackendList;
use crate::error::CatalogError;

/// Parse a catalog from a JSON string.
pub fn parse_catalog<T: DeserializeOwned>(raw: &str) -> Result<BackendList<T>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a catalog file.
pub fn read_catalog<T: DeserializeOwned>(path: &Path) -> Result<BackendList<T>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let list: BackendList<T> = parse_catalog(&raw)?;
    info!(path = %path.display(), count = list.len(), "Loaded plugin catalog");
    Ok(list)
}
