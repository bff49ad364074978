use std::io;

use thiserror::Error;

use super::token_merge::MalformedDocument;

/// Library-wide error type for strike operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Bundle name is invalid.
    #[error(
        "Invalid bundle name '{0}': must start with a letter and contain only letters, digits, or underscores"
    )]
    InvalidBundleName(String),

    /// Definition type string is not recognized.
    #[error("Unknown definition type '{0}'")]
    UnknownDefType(String),

    /// Bundle not found in catalog.
    #[error("Bundle '{name}' not found. Available: {available}")]
    BundleNotFound { name: String, available: String },

    /// Invalid catalog manifest.
    #[error("Invalid catalog entry '{bundle}': {reason}")]
    InvalidCatalogEntry { bundle: String, reason: String },

    /// Circular dependency detected during resolution.
    #[error("Circular dependency detected: {0}")]
    CircularDependency(String),

    /// Remote token document has no insertion point.
    #[error("Malformed document '{document}': {source}")]
    MalformedDocument {
        document: String,
        #[source]
        source: MalformedDocument,
    },

    /// Login was rejected or returned an unusable response.
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// Transport-level HTTP failure.
    #[error("HTTP request to {url} failed: {details}")]
    Http { url: String, details: String },

    /// Remote API answered with an error status.
    #[error("Remote API error ({status}) for {resource}: {body}")]
    Remote { status: u16, resource: String, body: String },

    /// Remote API answered successfully but with an unexpected payload.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Interactive prompt failed or was cancelled.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn malformed_document(document: impl Into<String>, source: MalformedDocument) -> Self {
        AppError::MalformedDocument { document: document.into(), source }
    }

    pub(crate) fn http(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        AppError::Http { url: url.into(), details: err.to_string() }
    }

    pub(crate) fn parse(what: impl Into<String>, err: impl std::fmt::Display) -> Self {
        AppError::ParseError { what: what.into(), details: err.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidBundleName(_)
            | AppError::UnknownDefType(_)
            | AppError::InvalidCatalogEntry { .. }
            | AppError::CircularDependency(_) => io::ErrorKind::InvalidInput,
            AppError::MalformedDocument { .. } | AppError::ParseError { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::BundleNotFound { .. } => io::ErrorKind::NotFound,
            AppError::LoginFailed(_) => io::ErrorKind::PermissionDenied,
            AppError::Http { .. } | AppError::Remote { .. } | AppError::Prompt(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
