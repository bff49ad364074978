mod authenticator;
mod bundle_catalog;
mod component_source;
mod component_store;
mod credential_prompt;
mod tooling_api;

pub use authenticator::Authenticator;
pub use bundle_catalog::BundleCatalog;
pub use component_source::ComponentSource;
pub use component_store::ComponentStore;
pub use credential_prompt::CredentialPrompt;
pub use tooling_api::{
    BundleRecord, DefinitionRecord, NewBundle, NewDefinition, ToolingApi, ToolingClientFactory,
};
