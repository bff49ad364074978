//! Dependency report: the deployment plan for a set of bundles.

use crate::domain::{AppError, DependencyGraph, DeploymentPlan};
use crate::ports::BundleCatalog;

pub fn execute<C: BundleCatalog + ?Sized>(
    catalog: &C,
    requested: &[String],
) -> Result<DeploymentPlan, AppError> {
    if requested.is_empty() {
        return Err(AppError::Configuration("Specify at least one bundle".to_string()));
    }
    DependencyGraph::resolve(requested, catalog)
}
