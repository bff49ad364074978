use crate::domain::StrikeConfig;
use crate::ports::{BundleCatalog, ComponentStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ComponentStore, C: BundleCatalog> {
    config: StrikeConfig,
    store: S,
    catalog: C,
}

impl<S: ComponentStore, C: BundleCatalog> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(config: StrikeConfig, store: S, catalog: C) -> Self {
        Self { config, store, catalog }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &StrikeConfig {
        &self.config
    }

    /// Get a reference to the local component store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the bundle catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
