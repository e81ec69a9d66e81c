//! Plugin Loaders
//!
//! A loader sits between the plugin registry and the dashboard panels. It
//! decides which descriptors a panel offers and which one is preselected.

use tracing::debug;

use crate::descriptor::BackendEntry;
use crate::error::LoaderError;

/// Selects the candidate list and the default plugin for a dashboard panel.
///
/// The provided methods are the baseline behaviour: hand the list through
/// untouched and pick the first entry. Implementors override them to filter
/// or reorder without touching callers.
pub trait Loader {
    /// Returns the plugins a panel may offer, in display order.
    fn load_plugin_list<'a, E: BackendEntry>(&self, defaults_list: &'a [E]) -> &'a [E] {
        debug!(count = defaults_list.len(), "Loading plugin list");
        defaults_list
    }

    /// Returns the value of the plugin used when nothing was chosen explicitly.
    fn load_default_plugin<'a, E: BackendEntry>(
        &self,
        plugin_list: &'a [E],
    ) -> Result<&'a E::Value, LoaderError> {
        let Some(first) = plugin_list.first() else {
            debug!("No plugins registered; no default to select");
            return Err(LoaderError::EmptyPluginList);
        };
        Ok(first.value())
    }
}

/// Loader backing the transform panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformDefaultLoader;

impl Loader for TransformDefaultLoader {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PluginDescriptor;

    fn list<T>(values: impl IntoIterator<Item = T>) -> Vec<PluginDescriptor<T>> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| PluginDescriptor::new(format!("plugin-{i}"), v))
            .collect()
    }

    #[test]
    fn plugin_list_is_passed_through() {
        let plugins = list(["A", "B"]);
        let loaded = TransformDefaultLoader.load_plugin_list(&plugins);
        assert_eq!(loaded, plugins.as_slice());
        assert!(std::ptr::eq(loaded, plugins.as_slice()));
    }

    #[test]
    fn plugin_list_keeps_order_and_duplicates() {
        let plugins = list(["B", "A", "B"]);
        let values: Vec<_> = TransformDefaultLoader
            .load_plugin_list(&plugins)
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, ["B", "A", "B"]);
    }

    #[test]
    fn loading_twice_is_stable() {
        let plugins = list([1, 2, 3]);
        let snapshot = plugins.clone();
        let first = TransformDefaultLoader.load_plugin_list(&plugins).to_vec();
        let second = TransformDefaultLoader.load_plugin_list(&plugins).to_vec();
        assert_eq!(first, second);
        assert_eq!(plugins, snapshot);
    }

    #[test]
    fn default_is_first_value() {
        let plugins = list(["A", "B"]);
        assert_eq!(TransformDefaultLoader.load_default_plugin(&plugins), Ok(&"A"));
    }

    #[test]
    fn default_of_single_numeric_entry() {
        let plugins = list([42]);
        assert_eq!(TransformDefaultLoader.load_default_plugin(&plugins), Ok(&42));
    }

    #[test]
    fn default_of_empty_list_is_an_error() {
        let plugins: Vec<PluginDescriptor<String>> = Vec::new();
        assert_eq!(
            TransformDefaultLoader.load_default_plugin(&plugins),
            Err(LoaderError::EmptyPluginList)
        );
    }

    #[test]
    fn overriding_the_list_leaves_default_selection_intact() {
        struct SkipFirst;
        impl Loader for SkipFirst {
            fn load_plugin_list<'a, E: BackendEntry>(&self, defaults_list: &'a [E]) -> &'a [E] {
                defaults_list.get(1..).unwrap_or_default()
            }
        }

        let plugins = list(["x", "y"]);
        let offered = SkipFirst.load_plugin_list(&plugins);
        assert_eq!(offered, &plugins[1..]);
        assert_eq!(SkipFirst.load_default_plugin(offered), Ok(&"y"));
        assert_eq!(SkipFirst.load_default_plugin(&plugins), Ok(&"x"));
    }
}
