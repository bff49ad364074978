//! Remote file repository port definition.

use crate::domain::{AppError, BundleName, DefType};

/// Read access to the public repository bundles are published in.
pub trait ComponentSource {
    /// Fetch one definition file of a bundle. `None` when the repository has no such file.
    fn fetch_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
    ) -> Result<Option<String>, AppError>;

    /// Fetch the body of an Apex class. `None` when the repository has no such class.
    fn fetch_apex_class(&self, name: &str) -> Result<Option<String>, AppError>;
}
