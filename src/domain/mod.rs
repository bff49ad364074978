pub mod bundle;
pub mod configuration;
pub mod def_type;
pub mod dependency_graph;
pub mod error;
pub mod identities;
pub mod session;
pub mod token_merge;

pub use bundle::{BundleKind, CatalogBundle, DeploymentPlan};
pub use configuration::{
    BundleDefaults, CONFIG_FILE, PlatformConfig, RepositoryConfig, StrikeConfig, load_config,
    parse_config_content,
};
pub use def_type::{DefFormat, DefType};
pub use dependency_graph::DependencyGraph;
pub use error::AppError;
pub use identities::BundleName;
pub use session::{Credentials, Session};
pub use token_merge::{
    MalformedDocument, TOKENS_CLOSING_MARKER, TokenDocument, closing_marker_count,
    compute_missing_lines, merge_into_remote,
};
