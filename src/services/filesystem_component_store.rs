//! Filesystem-backed working copy of downloaded bundles.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BundleName, DefType};
use crate::ports::ComponentStore;

const CLASSES_DIR: &str = "classes";

/// Working copy rooted at a directory such as `./strike-components`.
#[derive(Debug, Clone)]
pub struct FilesystemComponentStore {
    root: PathBuf,
}

impl FilesystemComponentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn bundle_dir(&self, bundle: &BundleName) -> PathBuf {
        self.root.join(bundle.as_str())
    }

    fn bundle_file(&self, bundle: &BundleName, def_type: DefType) -> PathBuf {
        self.bundle_dir(bundle).join(def_type.file_name(bundle.as_str()))
    }

    fn apex_class_file(&self, name: &str) -> PathBuf {
        self.root.join(CLASSES_DIR).join(format!("{}.cls", name))
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn write_creating_parent(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

impl ComponentStore for FilesystemComponentStore {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn exists(&self) -> bool {
        self.root.is_dir()
    }

    fn reset(&self) -> Result<(), AppError> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn bundle_exists(&self, bundle: &BundleName) -> bool {
        self.bundle_dir(bundle).is_dir()
    }

    fn write_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
        content: &str,
    ) -> Result<(), AppError> {
        write_creating_parent(&self.bundle_file(bundle, def_type), content)
    }

    fn read_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
    ) -> Result<Option<String>, AppError> {
        read_optional(&self.bundle_file(bundle, def_type))
    }

    fn write_apex_class(&self, name: &str, body: &str) -> Result<(), AppError> {
        write_creating_parent(&self.apex_class_file(name), body)
    }

    fn read_apex_class(&self, name: &str) -> Result<Option<String>, AppError> {
        read_optional(&self.apex_class_file(name))
    }
}
