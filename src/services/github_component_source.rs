//! Component repository client using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::domain::{AppError, BundleName, DefType, RepositoryConfig};
use crate::ports::ComponentSource;

/// Body the raw file host serves for missing paths.
const NOT_FOUND_BODY: &str = "404: Not Found\n";

/// HTTP client for a raw file repository (e.g. raw.githubusercontent.com).
#[derive(Debug, Clone)]
pub struct HttpComponentSource {
    base_url: String,
    client: Client,
}

impl HttpComponentSource {
    pub fn new(config: &RepositoryConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: config.base_url.as_str().trim_end_matches('/').to_string(), client })
    }

    fn bundle_file_url(&self, bundle: &BundleName, def_type: DefType) -> String {
        format!("{}/components/{}/{}", self.base_url, bundle, def_type.file_name(bundle.as_str()))
    }

    fn apex_class_url(&self, name: &str) -> String {
        format!("{}/classes/{}.cls", self.base_url, name)
    }

    fn fetch(&self, url: &str) -> Result<Option<String>, AppError> {
        tracing::debug!(url, "fetching repository file");

        let response = self.client.get(url).send().map_err(|e| AppError::http(url, e))?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Remote { status: status.as_u16(), resource: url.to_string(), body });
        }

        let body = response.text().map_err(|e| AppError::http(url, e))?;
        if body == NOT_FOUND_BODY {
            return Ok(None);
        }
        Ok(Some(body))
    }
}

impl ComponentSource for HttpComponentSource {
    fn fetch_bundle_file(
        &self,
        bundle: &BundleName,
        def_type: DefType,
    ) -> Result<Option<String>, AppError> {
        self.fetch(&self.bundle_file_url(bundle, def_type))
    }

    fn fetch_apex_class(&self, name: &str) -> Result<Option<String>, AppError> {
        self.fetch(&self.apex_class_url(name))
    }
}
