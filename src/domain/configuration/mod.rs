pub mod loader;
pub mod strike_config;

pub use loader::{CONFIG_FILE, load_config, parse_config_content};
pub use strike_config::{BundleDefaults, PlatformConfig, RepositoryConfig, StrikeConfig};
