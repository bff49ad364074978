//! Offline tokens merge between two files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, closing_marker_count, compute_missing_lines, merge_into_remote};

/// Result of merging a local tokens file into a remote copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensMergeOutcome {
    /// Lines inserted, each ending in `\n`.
    pub missing: Vec<String>,
    /// Merged document; `None` when the remote already had every line.
    pub merged: Option<String>,
    /// Where the merged document was written.
    pub written_to: Option<PathBuf>,
}

impl TokensMergeOutcome {
    pub fn is_up_to_date(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Merge `local` into `remote`; write the result to `output` when given.
pub fn execute(
    local: &Path,
    remote: &Path,
    output: Option<&Path>,
) -> Result<TokensMergeOutcome, AppError> {
    let local_text = fs::read_to_string(local)?;
    let remote_text = fs::read_to_string(remote)?;

    let missing = compute_missing_lines(&local_text, &remote_text);
    if missing.is_empty() {
        return Ok(TokensMergeOutcome { missing, merged: None, written_to: None });
    }

    let markers = closing_marker_count(&remote_text);
    if markers > 1 {
        tracing::warn!(
            document = %remote.display(),
            markers,
            "closing marker occurs more than once; inserting before each"
        );
    }

    let merged = merge_into_remote(&remote_text, &missing)
        .map_err(|e| AppError::malformed_document(remote.display().to_string(), e))?;

    let written_to = match output {
        Some(path) => {
            fs::write(path, &merged)?;
            Some(path.to_path_buf())
        }
        None => None,
    };

    Ok(TokensMergeOutcome { missing, merged: Some(merged), written_to })
}
