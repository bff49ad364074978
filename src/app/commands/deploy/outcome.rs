/// What happened to one remote record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Record created from the local file.
    Created,
    /// Record created from the built-in default source.
    CreatedDefault,
    /// Source overwritten with the local file.
    Updated,
    /// Local-only token lines inserted into the remote document.
    Merged,
    /// Remote already matches; nothing written.
    UpToDate,
    /// Nothing written because an input was missing or unusable.
    Skipped,
}

/// One line of deploy progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployAction {
    pub bundle: String,
    /// Definition label, `Bundle`, or `ApexClass`.
    pub target: String,
    pub kind: ActionKind,
    pub detail: Option<String>,
}

impl DeployAction {
    pub fn describe(&self) -> String {
        let verb = match self.kind {
            ActionKind::Created => "has been created",
            ActionKind::CreatedDefault => "has been created from default",
            ActionKind::Updated => "has been updated",
            ActionKind::Merged => "has been merged",
            ActionKind::UpToDate => "is already up to date",
            ActionKind::Skipped => "skipped",
        };
        match &self.detail {
            Some(detail) => format!("{} {} {} ({})", self.bundle, self.target, verb, detail),
            None => format!("{} {} {}", self.bundle, self.target, verb),
        }
    }
}

/// Result of a deploy run.
#[derive(Debug, Default)]
pub struct DeployOutcome {
    /// Bundles in the order they were deployed.
    pub bundles: Vec<String>,
    pub actions: Vec<DeployAction>,
    /// Remote documents that could not be reconciled.
    pub malformed: Vec<String>,
    pub warnings: Vec<String>,
}

impl DeployOutcome {
    pub(crate) fn record(
        &mut self,
        bundle: &str,
        target: impl Into<String>,
        kind: ActionKind,
        detail: Option<String>,
    ) {
        self.actions.push(DeployAction {
            bundle: bundle.to_string(),
            target: target.into(),
            kind,
            detail,
        });
    }

    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|action| action.kind == kind).count()
    }

    pub fn has_failures(&self) -> bool {
        !self.malformed.is_empty()
    }
}
