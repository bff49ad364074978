use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, BundleName, DefType};
use crate::ports::ComponentStore;

/// In-memory working copy keyed by relative path.
#[derive(Debug, Clone)]
pub struct MemoryComponentStore {
    present: Arc<Mutex<bool>>,
    files: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryComponentStore {
    /// Store whose folder already exists.
    pub fn new() -> Self {
        Self { present: Arc::new(Mutex::new(true)), files: Arc::new(Mutex::new(BTreeMap::new())) }
    }

    /// Store whose folder has never been created.
    pub fn absent() -> Self {
        let store = Self::new();
        *store.present.lock().unwrap() = false;
        store
    }

    pub fn with_file(self, bundle: &str, def_type: DefType, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(format!("{}/{}", bundle, def_type.file_name(bundle)), content.to_string());
        self
    }

    pub fn with_class(self, name: &str, body: &str) -> Self {
        self.files.lock().unwrap().insert(format!("classes/{}.cls", name), body.to_string());
        self
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl ComponentStore for MemoryComponentStore {
    fn root(&self) -> PathBuf {
        PathBuf::from("strike-components")
    }

    fn exists(&self) -> bool {
        *self.present.lock().unwrap()
    }

    fn reset(&self) -> Result<(), AppError> {
        self.files.lock().unwrap().clear();
        *self.present.lock().unwrap() = true;
        Ok(())
    }

    fn bundle_exists(&self, bundle: &BundleName) -> bool {
        let prefix = format!("{}/", bundle);
        self.files.lock().unwrap().keys().any(|path| path.starts_with(&prefix))
    }

    fn write_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
        content: &str,
    ) -> Result<(), AppError> {
        let path = format!("{}/{}", bundle, def_type.file_name(bundle.as_str()));
        self.files.lock().unwrap().insert(path, content.to_string());
        Ok(())
    }

    fn read_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
    ) -> Result<Option<String>, AppError> {
        Ok(self.get(&format!("{}/{}", bundle, def_type.file_name(bundle.as_str()))))
    }

    fn write_apex_class(&self, name: &str, body: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(format!("classes/{}.cls", name), body.to_string());
        Ok(())
    }

    fn read_apex_class(&self, name: &str) -> Result<Option<String>, AppError> {
        Ok(self.get(&format!("classes/{}.cls", name)))
    }
}
