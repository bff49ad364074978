//! Username/password login over the platform's SOAP partner endpoint.

use std::time::Duration;

use minijinja::{AutoEscape, Environment, context};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::{AppError, Credentials, PlatformConfig, Session};
use crate::ports::Authenticator;

const SOAP_ACTION: &str = "SOAPAction";
const LOGIN_TEMPLATE: &str = "login.xml";
const LOGOUT_TEMPLATE: &str = "logout.xml";

/// Authenticator that exchanges credentials for a session id.
pub struct SoapAuthenticator {
    login_url: Url,
    api_version: String,
    client: Client,
    templates: Environment<'static>,
}

impl std::fmt::Debug for SoapAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoapAuthenticator")
            .field("login_url", &self.login_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl SoapAuthenticator {
    pub fn new(config: &PlatformConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            login_url: config.login_url.clone(),
            api_version: config.api_version.clone(),
            client,
            templates: build_envelopes()?,
        })
    }

    fn soap_endpoint(&self, host: &Url) -> String {
        format!("{}/services/Soap/u/{}", host.as_str().trim_end_matches('/'), self.api_version)
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
        let template = self.templates.get_template(name).map_err(|e| {
            AppError::Configuration(format!("Failed to load template '{}': {}", name, e))
        })?;
        template.render(ctx).map_err(|e| {
            AppError::Configuration(format!("Failed to render template '{}': {}", name, e))
        })
    }

    fn post(&self, url: &str, action: &str, envelope: String) -> Result<(u16, String), AppError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/xml; charset=UTF-8")
            .header(SOAP_ACTION, action)
            .body(envelope)
            .send()
            .map_err(|e| AppError::http(url, e))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| AppError::http(url, e))?;
        Ok((status, body))
    }
}

fn build_envelopes() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    for (name, source) in [
        (LOGIN_TEMPLATE, include_str!("../assets/soap/login.xml")),
        (LOGOUT_TEMPLATE, include_str!("../assets/soap/logout.xml")),
    ] {
        env.add_template(name, source).map_err(|e| {
            AppError::Configuration(format!("Failed to register template '{}': {}", name, e))
        })?;
    }
    Ok(env)
}

impl Authenticator for SoapAuthenticator {
    fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        let url = self.soap_endpoint(&self.login_url);
        let envelope = self.render(
            LOGIN_TEMPLATE,
            context! { username => &credentials.username, password => &credentials.password },
        )?;

        tracing::debug!(url, username = %credentials.username, "logging in");
        let (status, body) = self.post(&url, "login", envelope)?;

        if let Some(fault) = element_text(&body, "faultstring") {
            return Err(AppError::LoginFailed(fault));
        }
        if !(200..300).contains(&status) {
            return Err(AppError::Remote { status, resource: url, body });
        }

        let session_id = element_text(&body, "sessionId")
            .ok_or_else(|| AppError::LoginFailed("response has no sessionId".into()))?;
        let server_url = element_text(&body, "serverUrl")
            .ok_or_else(|| AppError::LoginFailed("response has no serverUrl".into()))?;
        let instance_url = instance_from_server_url(&server_url)?;

        tracing::info!(instance = %instance_url, "session opened");
        Ok(Session { session_id, instance_url, api_version: self.api_version.clone() })
    }

    fn logout(&self, session: &Session) -> Result<(), AppError> {
        let url = self.soap_endpoint(&session.instance_url);
        let envelope =
            self.render(LOGOUT_TEMPLATE, context! { session_id => &session.session_id })?;

        let (status, body) = self.post(&url, "logout", envelope)?;
        if let Some(fault) = element_text(&body, "faultstring") {
            return Err(AppError::Remote { status, resource: url, body: fault });
        }
        if !(200..300).contains(&status) {
            return Err(AppError::Remote { status, resource: url, body });
        }

        tracing::info!(instance = %session.instance_url, "session closed");
        Ok(())
    }
}

/// Text content of the first element named `tag`, entity-decoded.
///
/// Matches `<tag>`, `<prefix:tag>` and either form carrying attributes.
/// Responses are flat partner-API envelopes, so nested elements of the same
/// name are not expected.
fn element_text(body: &str, tag: &str) -> Option<String> {
    let mut rest = body;
    while let Some(open) = rest.find('<') {
        rest = &rest[open + 1..];
        let end = rest.find('>')?;
        let head = &rest[..end];
        let qualified = head.split(|c: char| c.is_whitespace() || c == '/').next().unwrap_or("");
        let local = qualified.rsplit(':').next().unwrap_or(qualified);

        if local == tag && !head.starts_with('/') {
            if head.ends_with('/') {
                return Some(String::new());
            }
            let content = &rest[end + 1..];
            let close = format!("</{}>", qualified);
            let len = content.find(&close)?;
            return Some(decode_entities(&content[..len]));
        }
        rest = &rest[end + 1..];
    }
    None
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// `https://na1.salesforce.com/services/Soap/u/32.0/00D...` -> `https://na1.salesforce.com/`
fn instance_from_server_url(server_url: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(server_url).map_err(|e| AppError::parse("serverUrl", e))?;
    url.set_path("/");
    url.set_query(None);
    Ok(url)
}
