//! Plugin descriptors: one selectable backend implementation per entry.
//!
//! The dashboard receives these from the backend as an ordered list; the
//! list order is the backend's preference order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything that carries a backend `value`.
///
/// Loaders only ever look at the value, so any descriptor shape the
/// registry hands over can be used as long as it exposes one.
pub trait BackendEntry {
    type Value;

    fn value(&self) -> &Self::Value;
}

/// A plugin entry as sent by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor<T> {
    /// Display name shown in the dashboard selector.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    pub value: T,
    /// Any other backend metadata, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> PluginDescriptor<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            extra: Map::new(),
        }
    }
}

impl<T> BackendEntry for PluginDescriptor<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }
}

/// Owned, ordered list of plugin descriptors.
pub type BackendList<T> = Vec<PluginDescriptor<T>>;
