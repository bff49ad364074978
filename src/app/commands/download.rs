//! Download command: refresh the local working copy from the component repository.

use crate::app::AppContext;
use crate::domain::{AppError, DependencyGraph};
use crate::ports::{BundleCatalog, ComponentSource, ComponentStore};

/// Files written for one bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedBundle {
    pub name: String,
    pub files: Vec<String>,
}

/// Result of a download.
#[derive(Debug, Default)]
pub struct DownloadOutcome {
    /// Bundles in dependency order.
    pub bundles: Vec<DownloadedBundle>,
    /// Apex classes written under `classes/`.
    pub apex_classes: Vec<String>,
    /// Apex classes the repository did not have.
    pub missing_apex_classes: Vec<String>,
}

impl DownloadOutcome {
    pub fn file_count(&self) -> usize {
        self.bundles.iter().map(|bundle| bundle.files.len()).sum::<usize>()
            + self.apex_classes.len()
    }
}

/// Resolve `requested` (all catalog bundles when empty), reset the working
/// copy, and write every file the repository has for the resolved bundles.
pub fn execute<S, C, R>(
    ctx: &AppContext<S, C>,
    source: &R,
    requested: &[String],
) -> Result<DownloadOutcome, AppError>
where
    S: ComponentStore,
    C: BundleCatalog,
    R: ComponentSource + ?Sized,
{
    let requested: Vec<String> = if requested.is_empty() {
        ctx.catalog().names().into_iter().map(str::to_string).collect()
    } else {
        requested.to_vec()
    };

    let plan = DependencyGraph::resolve(&requested, ctx.catalog())?;
    let store = ctx.store();
    store.reset()?;

    let mut outcome = DownloadOutcome::default();

    for bundle in &plan.bundles {
        let mut files = Vec::new();
        for &def_type in bundle.kind.def_types() {
            if let Some(content) = source.fetch_bundle_file(&bundle.name, def_type)? {
                store.write_bundle_file(&bundle.name, def_type, &content)?;
                files.push(def_type.file_name(bundle.name.as_str()));
            }
        }
        if files.is_empty() {
            tracing::warn!(bundle = %bundle.name, "repository has no files for bundle");
        }
        outcome.bundles.push(DownloadedBundle { name: bundle.name.to_string(), files });
    }

    for class in &plan.apex_classes {
        match source.fetch_apex_class(class)? {
            Some(body) => {
                store.write_apex_class(class, &body)?;
                outcome.apex_classes.push(class.clone());
            }
            None => outcome.missing_apex_classes.push(class.clone()),
        }
    }

    Ok(outcome)
}
