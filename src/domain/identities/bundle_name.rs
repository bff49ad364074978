use chrono::{DateTime, Timelike, Utc};

use super::validation::validate_developer_name;
use crate::domain::AppError;

/// A validated bundle developer name.
///
/// Guarantees:
/// - Starts with an ASCII letter
/// - Contains only ASCII alphanumeric characters or `_`
/// - Safe to embed in a local path and in a quoted SOQL literal
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BundleName(String);

impl BundleName {
    /// Validate and create a new `BundleName`.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_developer_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidBundleName(name.to_string()))
        }
    }

    /// Throwaway name for a bundle deployed without an explicit name.
    pub fn prototype(now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_subsec_millis();
        Self(format!("Prototype_Component{}{}", now.second(), millis))
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BundleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BundleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
