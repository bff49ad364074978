//! Bundle catalog service - loads bundle manifests from embedded assets.

use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::identities::validation::validate_developer_name;
use crate::domain::{AppError, BundleKind, BundleName, CatalogBundle};
use crate::ports::BundleCatalog;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// On-disk shape of one `<bundle>.toml` manifest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleMeta {
    name: Option<String>,
    #[serde(default)]
    kind: BundleKind,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    apex_classes: Vec<String>,
}

/// Catalog of the bundles published in the component repository.
pub struct EmbeddedBundleCatalog {
    bundles: BTreeMap<String, CatalogBundle>,
}

impl EmbeddedBundleCatalog {
    /// Create a new catalog by loading all embedded manifests.
    pub fn new() -> Result<Self, AppError> {
        let mut bundles = BTreeMap::new();

        for file in CATALOG_DIR.files() {
            let path = file.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            let stem = path.file_stem().and_then(|n| n.to_str()).unwrap_or("");

            let content = file.contents_utf8().ok_or_else(|| AppError::InvalidCatalogEntry {
                bundle: stem.to_string(),
                reason: "manifest is not valid UTF-8".to_string(),
            })?;

            let bundle = parse_manifest(stem, content)?;
            bundles.insert(bundle.name.to_string(), bundle);
        }

        Ok(Self { bundles })
    }
}

fn parse_manifest(stem: &str, content: &str) -> Result<CatalogBundle, AppError> {
    let invalid = |reason: String| AppError::InvalidCatalogEntry {
        bundle: stem.to_string(),
        reason,
    };

    let meta: BundleMeta = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

    let name_str = meta.name.unwrap_or_else(|| stem.to_string());
    let name = BundleName::new(&name_str)
        .map_err(|_| invalid(format!("Invalid bundle name '{}'", name_str)))?;

    let mut dependencies = Vec::new();
    for dep in &meta.dependencies {
        dependencies.push(
            BundleName::new(dep).map_err(|_| invalid(format!("Invalid dependency name '{}'", dep)))?,
        );
    }

    if let Some(class) = meta.apex_classes.iter().find(|class| !validate_developer_name(class)) {
        return Err(invalid(format!("Invalid Apex class name '{}'", class)));
    }

    Ok(CatalogBundle {
        name,
        kind: meta.kind,
        summary: meta.summary,
        dependencies,
        apex_classes: meta.apex_classes,
    })
}

impl BundleCatalog for EmbeddedBundleCatalog {
    fn get(&self, name: &str) -> Option<&CatalogBundle> {
        self.bundles.get(name)
    }

    fn list_all(&self) -> Vec<&CatalogBundle> {
        self.bundles.values().collect()
    }

    fn names(&self) -> Vec<&str> {
        self.bundles.keys().map(String::as_str).collect()
    }
}
