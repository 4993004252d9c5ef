//! Stable identifier extraction from hrefs and text fragments.

use std::sync::LazyLock;

use regex::Regex;

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .expect("valid regex")
});

/// Finds the first UUID-shaped token in an href or text fragment.
///
/// Handles both query-string-embedded ids and ids sitting in the last path
/// segment. Only the exact 8-4-4-4-12 hex shape is accepted.
pub fn extract_uuid(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if let Some(m) = UUID_RE.find(href) {
        return Some(m.as_str().to_string());
    }
    // Some links only carry the id after the final slash.
    let last = href.rsplit('/').next()?;
    if UUID_RE.is_match(last) {
        return Some(last.to_string());
    }
    None
}
