//! Plugin lists and default-plugin selection for dashboard panels.

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod loader;

pub use catalog::{parse_catalog, read_catalog};
pub use descriptor::{BackendEntry, BackendList, PluginDescriptor};
pub use error::{CatalogError, LoaderError};
pub use loader::{Loader, TransformDefaultLoader};
