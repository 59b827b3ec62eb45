//! Record path helpers.
//!
//! Record paths are rooted, slash-separated (`/blog/first-post`). The root
//! record is `"/"` and has no parent.

/// Compute the parent of a record path.
///
/// Returns `None` for the root path and for the empty string (a degenerate
/// input treated as rootless).
pub fn parent_path(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // "" or "/" (or any run of slashes)
        return None;
    }

    match trimmed.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(trimmed[..idx].to_string()),
        None => None,
    }
}

/// Navigation target after a successful delete: the parent record, or the
/// root when the deleted record had no parent.
pub fn delete_target_path(path: &str) -> String {
    parent_path(path).unwrap_or_else(|| "/".to_string())
}

/// Payload for the attachments-changed notification: the parent path, or the
/// empty string when there is none.
pub fn attachment_parent_payload(path: &str) -> String {
    parent_path(path).unwrap_or_default()
}
