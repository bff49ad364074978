use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, BundleName, DefType};
use crate::ports::ComponentSource;

/// Repository serving files from memory and recording what was requested.
#[derive(Debug, Clone, Default)]
pub struct FakeComponentSource {
    files: HashMap<String, String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl FakeComponentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, bundle: &str, def_type: DefType, content: &str) -> Self {
        self.files.insert(def_type.file_name(bundle), content.to_string());
        self
    }

    pub fn with_class(mut self, name: &str, body: &str) -> Self {
        self.files.insert(format!("{}.cls", name), body.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn serve(&self, key: String) -> Result<Option<String>, AppError> {
        let body = self.files.get(&key).cloned();
        self.requests.lock().unwrap().push(key);
        Ok(body)
    }
}

impl ComponentSource for FakeComponentSource {
    fn fetch_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
    ) -> Result<Option<String>, AppError> {
        self.serve(def_type.file_name(bundle.as_str()))
    }

    fn fetch_apex_class(&self, name: &str) -> Result<Option<String>, AppError> {
        self.serve(format!("{}.cls", name))
    }
}
