//! Login credentials and the authenticated session they produce.

use std::fmt;

use url::Url;

/// Username/password pair used for a single login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// An open session against the remote platform.
///
/// Obtained from a login and passed explicitly to every remote call; it is
/// closed by the authenticator that opened it.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    /// Instance host serving REST calls for this session.
    pub instance_url: Url,
    pub api_version: String,
}

impl Session {
    /// Base URL of the tooling REST API for this session.
    pub fn tooling_base(&self) -> String {
        format!(
            "{}/services/data/v{}/tooling",
            self.instance_url.as_str().trim_end_matches('/'),
            self.api_version
        )
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("instance_url", &self.instance_url)
            .field("api_version", &self.api_version)
            .field("session_id", &"[REDACTED]")
            .finish()
    }
}
