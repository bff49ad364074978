//! Deploy command: create or update remote bundles from the local working copy.

use chrono::{DateTime, Utc};

use super::outcome::{ActionKind, DeployOutcome};
use crate::app::AppContext;
use crate::domain::{
    AppError, BundleKind, BundleName, Credentials, DefType, DependencyGraph, closing_marker_count,
    compute_missing_lines, merge_into_remote,
};
use crate::ports::{
    Authenticator, BundleCatalog, ComponentStore, NewBundle, NewDefinition, ToolingApi,
    ToolingClientFactory,
};

/// Options for the deploy command.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Bundle to deploy; a prototype name is generated when absent.
    pub bundle: Option<String>,
    /// Deploy every catalog dependency first, plus required Apex classes.
    pub with_deps: bool,
    /// Description for newly created bundles (overrides configuration).
    pub description: Option<String>,
}

/// Remote collaborators a deploy needs.
pub struct DeployServices<'a> {
    pub authenticator: &'a dyn Authenticator,
    pub tooling: &'a dyn ToolingClientFactory,
}

struct Target {
    name: BundleName,
    kind: BundleKind,
}

/// Run a deploy with already-resolved credentials.
///
/// The session opened for the run is closed before returning, whether or
/// not the run succeeded.
pub fn execute<S: ComponentStore, C: BundleCatalog>(
    ctx: &AppContext<S, C>,
    services: &DeployServices<'_>,
    credentials: &Credentials,
    options: &DeployOptions,
    now: DateTime<Utc>,
) -> Result<DeployOutcome, AppError> {
    let mut outcome = DeployOutcome::default();

    if !ctx.store().exists() {
        outcome.warnings.push(format!(
            "Component folder {} not found; run 'strike download' first. Falling back on defaults.",
            ctx.store().root().display()
        ));
    }

    let name = match options.bundle.as_deref() {
        Some(name) => BundleName::new(name)?,
        None => BundleName::prototype(now),
    };

    let (targets, apex_classes) = plan_targets(ctx, &name, options.with_deps)?;

    let session = services.authenticator.login(credentials)?;
    let result = services.tooling.connect(&session).and_then(|api| {
        let description =
            options.description.clone().unwrap_or_else(|| ctx.config().bundle.description.clone());
        let mut deployer = Deployer {
            api: api.as_ref(),
            store: ctx.store(),
            description,
            api_version: ctx.config().platform.api_version.clone(),
            outcome: &mut outcome,
        };
        for target in &targets {
            deployer.deploy_bundle(target)?;
        }
        for class in &apex_classes {
            deployer.deploy_apex_class(&name, class)?;
        }
        Ok(())
    });

    if let Err(err) = services.authenticator.logout(&session) {
        tracing::warn!(error = %err, "failed to close session");
        outcome.warnings.push(format!("Failed to close session: {}", err));
    }

    result.map(|()| outcome)
}

fn plan_targets<S: ComponentStore, C: BundleCatalog>(
    ctx: &AppContext<S, C>,
    name: &BundleName,
    with_deps: bool,
) -> Result<(Vec<Target>, Vec<String>), AppError> {
    if with_deps {
        let plan = DependencyGraph::resolve(&[name.to_string()], ctx.catalog())?;
        let targets =
            plan.bundles.into_iter().map(|b| Target { name: b.name, kind: b.kind }).collect();
        return Ok((targets, plan.apex_classes));
    }

    let kind = match ctx.catalog().get(name.as_str()) {
        Some(bundle) => bundle.kind,
        None => local_kind(ctx.store(), name)?,
    };
    Ok((vec![Target { name: name.clone(), kind }], Vec::new()))
}

/// Kind of a bundle outside the catalog, judged by the files in the working copy.
fn local_kind<S: ComponentStore>(store: &S, name: &BundleName) -> Result<BundleKind, AppError> {
    let markers = [(DefType::Tokens, BundleKind::Tokens), (DefType::Event, BundleKind::Event)];
    for (def_type, kind) in markers {
        if store.read_bundle_file(name, def_type)?.is_some() {
            tracing::debug!(bundle = %name, %kind, "bundle kind taken from local files");
            return Ok(kind);
        }
    }
    Ok(BundleKind::Component)
}

struct Deployer<'a, S: ComponentStore> {
    api: &'a dyn ToolingApi,
    store: &'a S,
    description: String,
    api_version: String,
    outcome: &'a mut DeployOutcome,
}

impl<S: ComponentStore> Deployer<'_, S> {
    fn deploy_bundle(&mut self, target: &Target) -> Result<(), AppError> {
        let bundle = target.name.as_str();
        self.outcome.bundles.push(bundle.to_string());

        match self.api.find_bundle(&target.name)? {
            Some(record) => self.update_bundle(target, &record.id),
            None => self.create_bundle(target),
        }
    }

    fn create_bundle(&mut self, target: &Target) -> Result<(), AppError> {
        let bundle = target.name.as_str();
        let bundle_id = self.api.create_bundle(&NewBundle {
            developer_name: target.name.clone(),
            description: self.description.clone(),
            api_version: self.api_version.clone(),
        })?;
        self.outcome.record(bundle, "Bundle", ActionKind::Created, None);

        for &def_type in target.kind.def_types() {
            let (source, kind) = match self.store.read_bundle_file(&target.name, def_type)? {
                Some(local) => (local, ActionKind::Created),
                None => match def_type.default_source() {
                    Some(default) => (default.to_string(), ActionKind::CreatedDefault),
                    None => continue,
                },
            };
            self.api.create_definition(&NewDefinition {
                bundle_id: bundle_id.clone(),
                def_type,
                source,
            })?;
            self.outcome.record(bundle, def_type.label(), kind, None);
        }
        Ok(())
    }

    fn update_bundle(&mut self, target: &Target, bundle_id: &str) -> Result<(), AppError> {
        let bundle = target.name.as_str();

        for &def_type in target.kind.def_types() {
            let Some(local) = self.store.read_bundle_file(&target.name, def_type)? else {
                if def_type.default_source().is_some() {
                    self.outcome.record(
                        bundle,
                        def_type.label(),
                        ActionKind::Skipped,
                        Some("file not found, not updating".into()),
                    );
                }
                continue;
            };

            let Some(remote) = self.api.find_definition(bundle_id, def_type)? else {
                self.api.create_definition(&NewDefinition {
                    bundle_id: bundle_id.to_string(),
                    def_type,
                    source: local,
                })?;
                self.outcome.record(bundle, def_type.label(), ActionKind::Created, None);
                continue;
            };

            if def_type == DefType::Tokens {
                self.reconcile_tokens(bundle, &remote.id, &local, &remote.source)?;
            } else if remote.source == local {
                self.outcome.record(bundle, def_type.label(), ActionKind::UpToDate, None);
            } else {
                self.api.update_definition(&remote.id, &local)?;
                self.outcome.record(bundle, def_type.label(), ActionKind::Updated, None);
            }
        }
        Ok(())
    }

    fn reconcile_tokens(
        &mut self,
        bundle: &str,
        definition_id: &str,
        local: &str,
        remote: &str,
    ) -> Result<(), AppError> {
        let label = DefType::Tokens.label();
        let missing = compute_missing_lines(local, remote);
        if missing.is_empty() {
            self.outcome.record(bundle, label, ActionKind::UpToDate, None);
            return Ok(());
        }

        let markers = closing_marker_count(remote);
        if markers > 1 {
            tracing::warn!(
                definition = definition_id,
                markers,
                "closing marker occurs more than once; inserting before each"
            );
        }

        match merge_into_remote(remote, &missing) {
            Ok(merged) => {
                self.api.update_definition(definition_id, &merged)?;
                let detail = match missing.len() {
                    1 => "1 new line".to_string(),
                    n => format!("{} new lines", n),
                };
                self.outcome.record(bundle, label, ActionKind::Merged, Some(detail));
            }
            Err(source) => {
                let err = AppError::malformed_document(definition_id, source);
                tracing::warn!(error = %err, "skipping tokens merge");
                self.outcome.record(bundle, label, ActionKind::Skipped, Some(err.to_string()));
                self.outcome.malformed.push(definition_id.to_string());
            }
        }
        Ok(())
    }

    fn deploy_apex_class(&mut self, owner: &BundleName, class: &str) -> Result<(), AppError> {
        let owner = owner.as_str();
        if self.api.find_apex_class(class)?.is_some() {
            self.outcome.record(owner, format!("ApexClass {}", class), ActionKind::UpToDate, None);
            return Ok(());
        }
        match self.store.read_apex_class(class)? {
            Some(body) => {
                self.api.create_apex_class(class, &body)?;
                self.outcome.record(owner, format!("ApexClass {}", class), ActionKind::Created, None);
            }
            None => self.outcome.record(
                owner,
                format!("ApexClass {}", class),
                ActionKind::Skipped,
                Some("class not downloaded".into()),
            ),
        }
        Ok(())
    }
}
