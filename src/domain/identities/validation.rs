/// Validates a bundle or Apex class identifier.
///
/// Checks:
/// - Non-empty
/// - First character is an ASCII letter
/// - Remaining characters are ASCII alphanumeric or '_'
/// - No doubled or trailing '_' (rejected by the platform's developer names)
pub fn validate_developer_name(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    if id.ends_with('_') || id.contains("__") {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
