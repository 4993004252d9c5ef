//! Shared text helpers for the source adapters.

use std::sync::LazyLock;

use regex::Regex;

static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*:\s*(\d+)").expect("valid regex"));

/// Normalizes a scraped score like "5 : 0" to "5:0".
/// Anything without two integer groups around a colon (postponed matches,
/// placeholder dashes) becomes the empty string.
pub fn normalize_score(raw: &str) -> String {
    match SCORE_RE.captures(raw) {
        Some(caps) => format!("{}:{}", &caps[1], &caps[2]),
        None => String::new(),
    }
}

/// Cuts a team name at an opening parenthesis. Parenthetical suffixes mark
/// team variants ("B", youth squads), not part of the comparable name.
pub fn truncate_at_paren(name: &str) -> String {
    match name.find('(') {
        Some(idx) => name[..idx].trim().to_string(),
        None => name.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_normalization_total() {
        assert_eq!(normalize_score("2:1"), "2:1");
        assert_eq!(normalize_score(" 5 : 0 "), "5:0");
        assert_eq!(normalize_score("10  :3"), "10:3");
        assert_eq!(normalize_score("—"), "");
        assert_eq!(normalize_score(""), "");
        assert_eq!(normalize_score("odloženo"), "");
    }

    #[test]
    fn score_normalization_idempotent() {
        let once = normalize_score("  3 : 2");
        assert_eq!(normalize_score(&once), once);
    }

    #[test]
    fn paren_truncation() {
        assert_eq!(truncate_at_paren("FC Krnov (B)"), "FC Krnov");
        assert_eq!(truncate_at_paren("FC Krnov"), "FC Krnov");
        assert_eq!(truncate_at_paren("  FC Krnov  "), "FC Krnov");
    }
}
