//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::app::{
    AppContext,
    commands::{deploy, deps, download, list, tokens},
};
use crate::domain::{BundleName, StrikeConfig, load_config};
use crate::services::{
    DialoguerPrompt, EmbeddedBundleCatalog, FilesystemComponentStore, HttpComponentSource,
    HttpToolingClientFactory, SoapAuthenticator,
};

pub use crate::app::commands::deploy::{ActionKind, DeployAction, DeployOptions, DeployOutcome};
pub use crate::app::commands::download::{DownloadOutcome, DownloadedBundle};
pub use crate::app::commands::list::BundleSummary;
pub use crate::app::commands::tokens::TokensMergeOutcome;
pub use crate::domain::{AppError, DeploymentPlan};

/// Create an `AppContext` for a working directory.
fn create_context(
    dir: &Path,
) -> Result<AppContext<FilesystemComponentStore, EmbeddedBundleCatalog>, AppError> {
    let config = load_config(dir)?;
    let store = FilesystemComponentStore::new(dir.join(&config.components_dir));
    let catalog = EmbeddedBundleCatalog::new()?;
    Ok(AppContext::new(config, store, catalog))
}

// =============================================================================
// Download Command API
// =============================================================================

/// Download bundles (and their dependencies) into the current directory.
pub fn download(bundles: &[String]) -> Result<DownloadOutcome, AppError> {
    download_at(std::env::current_dir()?, bundles)
}

/// Download bundles into the components folder under `dir`.
pub fn download_at(dir: impl Into<PathBuf>, bundles: &[String]) -> Result<DownloadOutcome, AppError> {
    let dir: PathBuf = dir.into();
    let ctx = create_context(&dir)?;
    let source = HttpComponentSource::new(&ctx.config().repository)?;
    download::execute(&ctx, &source, bundles)
}

// =============================================================================
// Deploy Command API
// =============================================================================

/// Deploy a bundle from the current directory to the configured platform.
///
/// Credentials come from `username`, the environment, `strike.toml`, or an
/// interactive prompt, in that order.
pub fn deploy(options: DeployOptions, username: Option<&str>) -> Result<DeployOutcome, AppError> {
    deploy_at(std::env::current_dir()?, options, username)
}

/// Deploy a bundle from the components folder under `dir`.
pub fn deploy_at(
    dir: impl Into<PathBuf>,
    options: DeployOptions,
    username: Option<&str>,
) -> Result<DeployOutcome, AppError> {
    if let Some(name) = options.bundle.as_deref() {
        BundleName::new(name)?;
    }

    let dir: PathBuf = dir.into();
    let ctx = create_context(&dir)?;
    let config: &StrikeConfig = ctx.config();

    let credentials = deploy::resolve_credentials(
        username,
        config.platform.username.as_deref(),
        |key: &str| std::env::var(key).ok(),
        &DialoguerPrompt,
    )?;

    let authenticator = SoapAuthenticator::new(&config.platform)?;
    let tooling = HttpToolingClientFactory::new(config.platform.timeout_secs);
    let services = deploy::DeployServices { authenticator: &authenticator, tooling: &tooling };

    deploy::execute(&ctx, &services, &credentials, &options, Utc::now())
}

// =============================================================================
// Catalog API
// =============================================================================

/// Resolve the deployment plan for `bundles`.
pub fn deps(bundles: &[String]) -> Result<DeploymentPlan, AppError> {
    let catalog = EmbeddedBundleCatalog::new()?;
    deps::execute(&catalog, bundles)
}

/// List every bundle in the catalog.
pub fn list() -> Result<Vec<BundleSummary>, AppError> {
    let catalog = EmbeddedBundleCatalog::new()?;
    Ok(list::execute(&catalog))
}

// =============================================================================
// Tokens API
// =============================================================================

/// Merge a local tokens file into a copy of the remote document.
pub fn merge_tokens(
    local: &Path,
    remote: &Path,
    output: Option<&Path>,
) -> Result<TokensMergeOutcome, AppError> {
    tokens::execute(local, remote, output)
}
