//! Dependency graph domain logic.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::domain::{AppError, BundleName, CatalogBundle, DeploymentPlan};
use crate::ports::BundleCatalog;

/// Domain logic for resolving bundle dependencies.
pub struct DependencyGraph;

impl DependencyGraph {
    /// Resolve dependencies and return bundles in deployment order.
    ///
    /// Uses Kahn's algorithm for topological sorting with cycle detection.
    /// Returns bundles with dependencies first, plus every Apex class the
    /// resolved bundles require.
    pub fn resolve<C: BundleCatalog + ?Sized>(
        requested: &[String],
        catalog: &C,
    ) -> Result<DeploymentPlan, AppError> {
        let mut needed: BTreeMap<BundleName, CatalogBundle> = BTreeMap::new();
        let mut visiting: BTreeSet<BundleName> = BTreeSet::new();

        for name in requested {
            let id = BundleName::new(name)?;
            Self::collect_dependencies(&id, catalog, &mut needed, &mut visiting, &mut Vec::new())?;
        }

        // Edge A -> B means A depends on B (B must be deployed before A)
        let mut in_degree: BTreeMap<BundleName, usize> =
            needed.keys().map(|k| (k.clone(), 0)).collect();
        let mut dependents: BTreeMap<BundleName, Vec<BundleName>> =
            needed.keys().map(|k| (k.clone(), Vec::new())).collect();

        for (name, bundle) in &needed {
            for dep in &bundle.dependencies {
                if let (Some(degree), Some(waiting)) =
                    (in_degree.get_mut(name), dependents.get_mut(dep))
                {
                    *degree += 1;
                    waiting.push(name.clone());
                }
            }
        }

        // BTreeMap iteration is sorted, so the initial queue is deterministic
        let mut queue: VecDeque<BundleName> =
            in_degree.iter().filter(|&(_, deg)| *deg == 0).map(|(k, _)| k.clone()).collect();

        let mut bundles: Vec<CatalogBundle> = Vec::new();
        let mut apex_classes: BTreeSet<String> = BTreeSet::new();

        while let Some(current) = queue.pop_front() {
            let Some(bundle) = needed.remove(&current) else {
                continue;
            };
            apex_classes.extend(bundle.apex_classes.iter().cloned());
            bundles.push(bundle);

            let mut next_batch = Vec::new();
            for dependent in dependents.remove(&current).unwrap_or_default() {
                if let Some(deg) = in_degree.get_mut(&dependent) {
                    *deg -= 1;
                    if *deg == 0 {
                        next_batch.push(dependent);
                    }
                }
            }

            next_batch.sort();
            queue.extend(next_batch);
        }

        if bundles.len() != in_degree.len() {
            let remaining: Vec<_> =
                in_degree.iter().filter(|&(_, deg)| *deg > 0).map(|(k, _)| k.to_string()).collect();
            return Err(AppError::CircularDependency(remaining.join(", ")));
        }

        Ok(DeploymentPlan { bundles, apex_classes: apex_classes.into_iter().collect() })
    }

    fn collect_dependencies<C: BundleCatalog + ?Sized>(
        id: &BundleName,
        catalog: &C,
        collected: &mut BTreeMap<BundleName, CatalogBundle>,
        visiting: &mut BTreeSet<BundleName>,
        path: &mut Vec<String>,
    ) -> Result<(), AppError> {
        if collected.contains_key(id) {
            return Ok(());
        }

        let name_str = id.as_str();

        if visiting.contains(id) {
            path.push(name_str.to_string());
            return Err(AppError::CircularDependency(path.join(" -> ")));
        }

        let bundle = catalog.get(name_str).ok_or_else(|| AppError::BundleNotFound {
            name: name_str.to_string(),
            available: catalog.names().join(", "),
        })?;

        visiting.insert(id.clone());
        path.push(name_str.to_string());

        for dep in &bundle.dependencies {
            Self::collect_dependencies(dep, catalog, collected, visiting, path)?;
        }

        path.pop();
        visiting.remove(id);
        collected.insert(id.clone(), bundle.clone());

        Ok(())
    }
}
