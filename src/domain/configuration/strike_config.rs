//! Strike configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `strike.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrikeConfig {
    /// Local working copy of downloaded bundles.
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,
    /// Public file repository the bundles are fetched from.
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Remote platform the bundles are deployed to.
    #[serde(default)]
    pub platform: PlatformConfig,
    /// Values applied to bundles created by `deploy`.
    #[serde(default)]
    pub bundle: BundleDefaults,
}

impl Default for StrikeConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            repository: RepositoryConfig::default(),
            platform: PlatformConfig::default(),
            bundle: BundleDefaults::default(),
        }
    }
}

impl StrikeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.components_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("components_dir must not be empty".to_string()));
        }
        self.repository.validate()?;
        self.platform.validate()?;
        Ok(())
    }
}

fn default_components_dir() -> PathBuf {
    PathBuf::from("strike-components")
}

/// Raw file repository configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Base URL; bundles live under `components/`, Apex classes under `classes/`.
    #[serde(default = "default_repository_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self { base_url: default_repository_url(), timeout_secs: default_timeout() }
    }
}

impl RepositoryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "repository.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_repository_url() -> Url {
    Url::parse("https://raw.githubusercontent.com/appiphony/Strike-Components/master")
        .expect("Default repository URL must be valid")
}

/// Remote platform configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    /// Login endpoint host.
    #[serde(default = "default_login_url")]
    pub login_url: Url,
    /// API version in `NN.N` form.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Username used when neither the flag nor the environment provides one.
    #[serde(default)]
    pub username: Option<String>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout(),
            username: None,
        }
    }
}

impl PlatformConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "platform.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !is_api_version(&self.api_version) {
            return Err(AppError::InvalidConfig(format!(
                "platform.api_version '{}' must look like 32.0",
                self.api_version
            )));
        }
        Ok(())
    }
}

fn is_api_version(value: &str) -> bool {
    let Some((major, minor)) = value.split_once('.') else {
        return false;
    };
    !major.is_empty()
        && !minor.is_empty()
        && major.chars().all(|c| c.is_ascii_digit())
        && minor.chars().all(|c| c.is_ascii_digit())
}

fn default_login_url() -> Url {
    Url::parse("https://login.salesforce.com").expect("Default login URL must be valid")
}

fn default_api_version() -> String {
    "32.0".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Defaults for newly created bundles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleDefaults {
    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for BundleDefaults {
    fn default() -> Self {
        Self { description: default_description() }
    }
}

fn default_description() -> String {
    "I was created from Strike-CLI".to_string()
}
