//! Club name canonicalization and fuzzy-comparison helpers.
//!
//! Federation club names are legal entity names ("FC Krnov z.s."); the
//! discriminating, search-friendly token is usually the place name sitting
//! just before the legal suffix.

/// Canonical comparison/cache key: trimmed and lower-cased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive equality without trimming, matching how scraped names
/// are compared after extraction.
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// True iff normalized `needle` is a non-empty substring of normalized
/// `haystack`.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    let needle = normalize(needle);
    if needle.is_empty() {
        return false;
    }
    normalize(haystack).contains(&needle)
}

/// Legal-entity suffixes that never discriminate between clubs.
const LEGAL_SUFFIXES: &[&str] = &[
    "z.s.", "z.s", "zs", "zapsany", "zapsaný", "spolek", "o.s.", "o.s", "os", "a.s.", "a.s",
    "as", "s.r.o.", "s.r.o", "sro",
];

const PUNCT: &[char] = &[
    ',', '.', ';', ':', '-', '(', ')', '[', ']', '{', '}', '"', '\'', '`', '“', '”', '’',
];

/// Derives a single search token from a full club name, e.g.
/// "TJ Sokol Krnov z.s." -> "krnov".
///
/// Walks the words from the end, skipping legal suffixes, and returns the
/// first word of at least three letters. Falls back to the sanitized last
/// word when nothing qualifies.
pub fn simplify_club_query(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return String::new();
    }

    for part in parts.iter().rev() {
        let tok = part.trim_matches(PUNCT);
        let lt = tok.to_lowercase();
        if LEGAL_SUFFIXES.contains(&lt.as_str()) {
            continue;
        }
        if lt.chars().count() >= 3 && lt.chars().any(|c| c.is_alphabetic()) {
            return lt;
        }
    }

    parts[parts.len() - 1].trim_matches(PUNCT).to_lowercase()
}
