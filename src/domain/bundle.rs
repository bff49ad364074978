//! Bundle catalog domain models.

use serde::{Deserialize, Serialize};

use crate::domain::{BundleName, DefType};

/// What a bundle contributes to a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    /// UI component with markup, scripts and styles.
    #[default]
    Component,
    /// Application or component event.
    Event,
    /// Design tokens.
    Tokens,
}

impl BundleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleKind::Component => "component",
            BundleKind::Event => "event",
            BundleKind::Tokens => "tokens",
        }
    }

    /// Definition types a bundle of this kind can carry.
    pub fn def_types(&self) -> &'static [DefType] {
        match self {
            BundleKind::Component => &[
                DefType::Component,
                DefType::Controller,
                DefType::Helper,
                DefType::Renderer,
                DefType::Style,
                DefType::Documentation,
                DefType::Design,
                DefType::Svg,
            ],
            BundleKind::Event => &[DefType::Event],
            BundleKind::Tokens => &[DefType::Tokens],
        }
    }
}

impl std::fmt::Display for BundleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bundle known to the catalog along with what it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBundle {
    pub name: BundleName,
    pub kind: BundleKind,
    pub summary: String,
    /// Sub-components, events and tokens this bundle references.
    pub dependencies: Vec<BundleName>,
    /// Apex classes the bundle calls into.
    pub apex_classes: Vec<String>,
}

/// Ordered result of resolving requested bundles against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeploymentPlan {
    /// Bundles in deployment order (dependencies first).
    pub bundles: Vec<CatalogBundle>,
    /// Sorted, de-duplicated Apex classes required by the bundles.
    pub apex_classes: Vec<String>,
}

impl DeploymentPlan {
    pub fn bundle_names(&self) -> Vec<&str> {
        self.bundles.iter().map(|bundle| bundle.name.as_str()).collect()
    }
}
