//! Local working copy port definition.

use std::path::PathBuf;

use crate::domain::{AppError, BundleName, DefType};

/// Local folder holding downloaded bundles and Apex classes.
pub trait ComponentStore {
    /// Root of the working copy.
    fn root(&self) -> PathBuf;

    /// Whether the working copy folder exists.
    fn exists(&self) -> bool;

    /// Delete the working copy and recreate it empty.
    fn reset(&self) -> Result<(), AppError>;

    /// Whether a folder for `bundle` exists.
    fn bundle_exists(&self, bundle: &BundleName) -> bool;

    /// Write one definition file, creating the bundle folder as needed.
    fn write_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
        content: &str,
    ) -> Result<(), AppError>;

    /// Read one definition file. `None` when the file is absent.
    fn read_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
    ) -> Result<Option<String>, AppError>;

    /// Write an Apex class body under `classes/`.
    fn write_apex_class(&self, name: &str, body: &str) -> Result<(), AppError>;

    /// Read an Apex class body. `None` when the class is absent.
    fn read_apex_class(&self, name: &str) -> Result<Option<String>, AppError>;
}
