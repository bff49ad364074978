//! Tooling API port definition.

use crate::domain::{AppError, BundleName, DefType, Session};

/// Existing `AuraDefinitionBundle` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRecord {
    pub id: String,
    pub developer_name: String,
}

/// Existing `AuraDefinition` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRecord {
    pub id: String,
    pub def_type: DefType,
    pub source: String,
}

/// Payload for a new `AuraDefinitionBundle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBundle {
    pub developer_name: BundleName,
    pub description: String,
    pub api_version: String,
}

/// Payload for a new `AuraDefinition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDefinition {
    pub bundle_id: String,
    pub def_type: DefType,
    pub source: String,
}

/// Port for the metadata records a deployment creates or updates.
pub trait ToolingApi {
    /// Look up a bundle by developer name.
    fn find_bundle(&self, name: &BundleName) -> Result<Option<BundleRecord>, AppError>;

    /// Create a bundle and return its record id.
    fn create_bundle(&self, bundle: &NewBundle) -> Result<String, AppError>;

    /// Look up the definition of `def_type` inside a bundle.
    fn find_definition(
        &self,
        bundle_id: &str,
        def_type: DefType,
    ) -> Result<Option<DefinitionRecord>, AppError>;

    /// Create a definition and return its record id.
    fn create_definition(&self, definition: &NewDefinition) -> Result<String, AppError>;

    /// Replace the source of an existing definition.
    fn update_definition(&self, id: &str, source: &str) -> Result<(), AppError>;

    /// Look up an Apex class id by name.
    fn find_apex_class(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Create an Apex class and return its record id.
    fn create_apex_class(&self, name: &str, body: &str) -> Result<String, AppError>;
}

/// Builds a tooling client bound to an open session.
pub trait ToolingClientFactory {
    fn connect(&self, session: &Session) -> Result<Box<dyn ToolingApi>, AppError>;
}
