//! Catalog listing.

use crate::domain::BundleKind;
use crate::ports::BundleCatalog;

/// One row of `strike list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub name: String,
    pub kind: BundleKind,
    pub summary: String,
    pub dependencies: Vec<String>,
}

pub fn execute<C: BundleCatalog + ?Sized>(catalog: &C) -> Vec<BundleSummary> {
    catalog
        .list_all()
        .into_iter()
        .map(|bundle| BundleSummary {
            name: bundle.name.to_string(),
            kind: bundle.kind,
            summary: bundle.summary.clone(),
            dependencies: bundle.dependencies.iter().map(ToString::to_string).collect(),
        })
        .collect()
}
