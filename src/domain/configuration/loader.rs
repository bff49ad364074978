//! Configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, StrikeConfig};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "strike.toml";

/// Load `strike.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> Result<StrikeConfig, AppError> {
    let path = dir.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            parse_config_content(&content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(StrikeConfig::default()),
        Err(err) => Err(err.into()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<StrikeConfig, AppError> {
    let config: StrikeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
