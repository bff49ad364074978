//! Tooling API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::{AppError, BundleName, DefType, Session};
use crate::ports::{
    BundleRecord, DefinitionRecord, NewBundle, NewDefinition, ToolingApi, ToolingClientFactory,
};

/// HTTP client for the tooling REST API, bound to one session.
#[derive(Clone)]
pub struct HttpToolingClient {
    session: Session,
    base: String,
    client: Client,
}

impl std::fmt::Debug for HttpToolingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpToolingClient").field("session", &self.session).finish()
    }
}

impl HttpToolingClient {
    pub fn new(session: Session, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let base = session.tooling_base();
        Ok(Self { session, base, client })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Bearer {}", self.session.session_id))
    }

    fn send(&self, url: &str, request: RequestBuilder) -> Result<Response, AppError> {
        let response = self.authorized(request).send().map_err(|e| AppError::http(url, e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::Remote { status: status.as_u16(), resource: url.to_string(), body })
    }

    fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>, AppError> {
        let url = format!("{}/query/", self.base);
        tracing::debug!(soql, "tooling query");

        let response = self.send(&url, self.client.get(&url).query(&[("q", soql)]))?;
        let result: QueryResponse<T> =
            response.json().map_err(|e| AppError::parse("query response", e))?;
        Ok(result.records)
    }

    fn create(&self, sobject: &str, body: serde_json::Value) -> Result<String, AppError> {
        let url = format!("{}/sobjects/{}/", self.base, sobject);
        tracing::debug!(sobject, "tooling create");

        let response = self.send(&url, self.client.post(&url).json(&body))?;
        let created: CreateResponse =
            response.json().map_err(|e| AppError::parse("create response", e))?;
        if !created.success {
            return Err(AppError::Remote {
                status: 200,
                resource: url,
                body: serde_json::to_string(&created.errors).unwrap_or_default(),
            });
        }
        Ok(created.id)
    }
}

/// Quote a value as a SOQL string literal.
fn soql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    records: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
    #[serde(default = "default_true")]
    success: bool,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BundleRow {
    id: String,
    developer_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DefinitionRow {
    id: String,
    def_type: DefType,
    #[serde(default)]
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct IdRow {
    id: String,
}

impl ToolingApi for HttpToolingClient {
    fn find_bundle(&self, name: &BundleName) -> Result<Option<BundleRecord>, AppError> {
        let soql = format!(
            "SELECT Id, DeveloperName FROM AuraDefinitionBundle WHERE DeveloperName = {}",
            soql_literal(name.as_str())
        );
        let rows: Vec<BundleRow> = self.query(&soql)?;
        Ok(rows
            .into_iter()
            .next()
            .map(|row| BundleRecord { id: row.id, developer_name: row.developer_name }))
    }

    fn create_bundle(&self, bundle: &NewBundle) -> Result<String, AppError> {
        self.create(
            "AuraDefinitionBundle",
            json!({
                "Description": bundle.description,
                "DeveloperName": bundle.developer_name.as_str(),
                "MasterLabel": bundle.developer_name.as_str(),
                "ApiVersion": bundle.api_version,
            }),
        )
    }

    fn find_definition(
        &self,
        bundle_id: &str,
        def_type: DefType,
    ) -> Result<Option<DefinitionRecord>, AppError> {
        let soql = format!(
            "SELECT Id, DefType, Source FROM AuraDefinition WHERE AuraDefinitionBundleId = {} AND DefType = {}",
            soql_literal(bundle_id),
            soql_literal(def_type.as_str())
        );
        let rows: Vec<DefinitionRow> = self.query(&soql)?;
        Ok(rows.into_iter().next().map(|row| DefinitionRecord {
            id: row.id,
            def_type: row.def_type,
            source: row.source.unwrap_or_default(),
        }))
    }

    fn create_definition(&self, definition: &NewDefinition) -> Result<String, AppError> {
        self.create(
            "AuraDefinition",
            json!({
                "AuraDefinitionBundleId": definition.bundle_id,
                "DefType": definition.def_type.as_str(),
                "Format": definition.def_type.format().as_str(),
                "Source": definition.source,
            }),
        )
    }

    fn update_definition(&self, id: &str, source: &str) -> Result<(), AppError> {
        let url = format!("{}/sobjects/AuraDefinition/{}", self.base, id);
        tracing::debug!(id, "tooling update");
        self.send(&url, self.client.patch(&url).json(&json!({ "Source": source })))?;
        Ok(())
    }

    fn find_apex_class(&self, name: &str) -> Result<Option<String>, AppError> {
        let soql = format!("SELECT Id FROM ApexClass WHERE Name = {}", soql_literal(name));
        let rows: Vec<IdRow> = self.query(&soql)?;
        Ok(rows.into_iter().next().map(|row| row.id))
    }

    fn create_apex_class(&self, name: &str, body: &str) -> Result<String, AppError> {
        tracing::debug!(name, "creating Apex class");
        self.create("ApexClass", json!({ "Body": body }))
    }
}

/// Factory producing [`HttpToolingClient`]s for freshly opened sessions.
#[derive(Debug, Clone, Copy)]
pub struct HttpToolingClientFactory {
    timeout_secs: u64,
}

impl HttpToolingClientFactory {
    pub fn new(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }
}

impl ToolingClientFactory for HttpToolingClientFactory {
    fn connect(&self, session: &Session) -> Result<Box<dyn ToolingApi>, AppError> {
        Ok(Box::new(HttpToolingClient::new(session.clone(), self.timeout_secs)?))
    }
}
