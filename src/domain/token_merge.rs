//! Token document reconciliation.
//!
//! A tokens definition is merged rather than overwritten: lines that exist
//! locally but nowhere in the remote document are spliced in right before the
//! remote closing marker. Remote-only lines are never touched.

use thiserror::Error;

/// Closing marker of an Aura tokens document.
pub const TOKENS_CLOSING_MARKER: &str = "</aura:tokens>";

/// The remote document has no closing marker, so there is no insertion point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("closing marker `{marker}` not found")]
pub struct MalformedDocument {
    pub marker: &'static str,
}

/// A token document viewed as raw text plus its ordered content lines.
///
/// Content lines exclude the `\n` terminator; any other whitespace
/// (including a trailing `\r`) is part of the line.
#[derive(Debug, Clone, Copy)]
pub struct TokenDocument<'a> {
    raw: &'a str,
}

impl<'a> TokenDocument<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> + 'a {
        let raw = self.raw;
        let trimmed = raw.strip_suffix('\n').unwrap_or(raw);
        trimmed.split('\n').filter(move |_| !raw.is_empty())
    }

    /// Whether `line` occurs anywhere in the document text.
    pub fn contains(&self, line: &str) -> bool {
        self.raw.contains(line)
    }
}

/// Lines of `local_text` that do not occur anywhere in `remote_text`.
///
/// Comparison is exact and line-granular. Each returned line carries a `\n`
/// terminator. Blank lines always occur in the remote text and are therefore
/// never reported. Repeated local lines are reported once per occurrence.
pub fn compute_missing_lines(local_text: &str, remote_text: &str) -> Vec<String> {
    let local = TokenDocument::new(local_text);
    let remote = TokenDocument::new(remote_text);

    local.lines().filter(|line| !remote.contains(line)).map(|line| format!("{line}\n")).collect()
}

/// Insert `missing_lines` immediately before the closing marker of `remote_text`.
///
/// Every occurrence of the marker receives the block. Callers can detect that
/// case up front with [`closing_marker_count`].
pub fn merge_into_remote(
    remote_text: &str,
    missing_lines: &[String],
) -> Result<String, MalformedDocument> {
    merge_before_marker(remote_text, missing_lines, TOKENS_CLOSING_MARKER)
}

/// Number of closing markers in `remote_text`; more than one makes a merge ambiguous.
pub fn closing_marker_count(remote_text: &str) -> usize {
    remote_text.matches(TOKENS_CLOSING_MARKER).count()
}

pub(crate) fn merge_before_marker(
    remote_text: &str,
    missing_lines: &[String],
    marker: &'static str,
) -> Result<String, MalformedDocument> {
    if !remote_text.contains(marker) {
        return Err(MalformedDocument { marker });
    }

    let block: String = missing_lines.concat();
    Ok(remote_text.replace(marker, &format!("{block}{marker}")))
}
