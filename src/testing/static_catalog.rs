use std::collections::BTreeMap;

use crate::domain::CatalogBundle;
use crate::ports::BundleCatalog;

/// Catalog built from a fixed list of bundles.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    bundles: BTreeMap<String, CatalogBundle>,
}

impl StaticCatalog {
    pub fn new(bundles: Vec<CatalogBundle>) -> Self {
        Self { bundles: bundles.into_iter().map(|b| (b.name.to_string(), b)).collect() }
    }
}

impl BundleCatalog for StaticCatalog {
    fn get(&self, name: &str) -> Option<&CatalogBundle> {
        self.bundles.get(name)
    }

    fn list_all(&self) -> Vec<&CatalogBundle> {
        self.bundles.values().collect()
    }

    fn names(&self) -> Vec<&str> {
        self.bundles.keys().map(String::as_str).collect()
    }
}
