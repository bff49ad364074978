//! Bundle catalog port definition.

use crate::domain::CatalogBundle;

/// Trait for accessing the bundle catalog.
pub trait BundleCatalog {
    /// Get a bundle by name.
    fn get(&self, name: &str) -> Option<&CatalogBundle>;

    /// List all available bundles sorted by name.
    fn list_all(&self) -> Vec<&CatalogBundle>;

    /// Get all bundle names.
    fn names(&self) -> Vec<&str>;
}
