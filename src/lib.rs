//! strike: download Strike component bundles and deploy them to a Salesforce org.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{
    ActionKind, BundleSummary, DeployAction, DeployOptions, DeployOutcome, DeploymentPlan,
    DownloadOutcome, DownloadedBundle, TokensMergeOutcome, deploy, deploy_at, deps, download,
    download_at, list, merge_tokens,
};
pub use domain::{AppError, compute_missing_lines, merge_into_remote};
