mod dialoguer_prompt;
mod embedded_catalog;
mod filesystem_component_store;
mod github_component_source;
mod soap_authenticator;
mod tooling_client_http;

pub use dialoguer_prompt::DialoguerPrompt;
pub use embedded_catalog::EmbeddedBundleCatalog;
pub use filesystem_component_store::FilesystemComponentStore;
pub use github_component_source::HttpComponentSource;
pub use soap_authenticator::SoapAuthenticator;
pub use tooling_client_http::{HttpToolingClient, HttpToolingClientFactory};
