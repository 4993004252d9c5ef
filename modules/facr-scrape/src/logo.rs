//! Team logo resolution backed by a process-wide cache.

use std::collections::HashMap;
use std::sync::Arc;

use facr_common::{Match, SearchResult};
use tokio::sync::RwLock;
use tracing::warn;

use crate::names::{eq_fold, normalize, simplify_club_query};
use crate::search::ClubSearch;
use crate::urls::media_logo_url;

/// Fallback image when no team-specific logo can be resolved, and for
/// free-slot rows that denote no opponent at all.
pub const PLACEHOLDER_LOGO_URL: &str = "https://www.fotbal.cz/dist/img/logo-club-empty.svg";

/// Free-slot/bye markers; such rows must never trigger a search.
const NO_OPPONENT_MARKERS: &[&str] = &["volno", "volný los", "volny los", "bye"];

/// Name-keyed logo cache shared by every request for the process lifetime.
/// Empty values are cached too, so a club without a logo costs one lookup,
/// not one per appearance. Club names are low-cardinality and logos rarely
/// change mid-run, so there is no eviction or expiry.
pub struct LogoCache {
    entries: RwLock<HashMap<String, String>>,
}

impl LogoCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn insert(&self, key: String, value: String) {
        self.entries.write().await.insert(key, value);
    }
}

impl Default for LogoCache {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct LogoResolver {
    cache: Arc<LogoCache>,
    search: Arc<dyn ClubSearch>,
}

impl LogoResolver {
    pub fn new(cache: Arc<LogoCache>, search: Arc<dyn ClubSearch>) -> Self {
        Self { cache, search }
    }

    /// Best-effort logo URL for a team.
    ///
    /// An identifier short-circuits to the official media URL with no
    /// network call. Name-only teams go through the search lookup, with the
    /// outcome cached under the normalized name.
    pub async fn resolve(&self, team_name: &str, team_id: Option<&str>) -> String {
        let key = normalize(team_name);
        if key.is_empty() || NO_OPPONENT_MARKERS.iter().any(|m| key.contains(m)) {
            return PLACEHOLDER_LOGO_URL.to_string();
        }

        if let Some(id) = team_id.map(str::trim).filter(|id| !id.is_empty()) {
            return media_logo_url(id);
        }

        if let Some(hit) = self.cache.get(&key).await {
            return if hit.is_empty() {
                PLACEHOLDER_LOGO_URL.to_string()
            } else {
                hit
            };
        }

        match self.search_logo(team_name, &key).await {
            Some(resolved) => {
                self.cache.insert(key, resolved.clone()).await;
                if resolved.is_empty() {
                    PLACEHOLDER_LOGO_URL.to_string()
                } else {
                    resolved
                }
            }
            // Transport failure: degrade without caching, so a later
            // request can still succeed.
            None => PLACEHOLDER_LOGO_URL.to_string(),
        }
    }

    /// Resolves both team logos of every match in place.
    pub async fn attach_match_logos(&self, matches: &mut [Match]) {
        for m in matches {
            m.home_logo_url = Some(self.resolve(&m.home, m.home_id.as_deref()).await);
            m.away_logo_url = Some(self.resolve(&m.away, m.away_id.as_deref()).await);
        }
    }

    /// Searches by simplified token first, falling back to the full name
    /// when the token yields nothing. `None` means the lookup itself failed.
    async fn search_logo(&self, full_name: &str, key: &str) -> Option<String> {
        let token = simplify_club_query(full_name);
        let query = if token.is_empty() {
            full_name
        } else {
            token.as_str()
        };

        let results = match self.search.search(query).await {
            Ok(results) if !results.is_empty() => results,
            _ => match self.search.search(full_name).await {
                Ok(results) => results,
                Err(e) => {
                    warn!(team = full_name, error = %e, "logo search failed");
                    return None;
                }
            },
        };

        Some(pick_logo(&results, full_name, key))
    }
}

/// Selection policy over search results: exact name match, then
/// either-direction containment, then the first result.
fn pick_logo(results: &[SearchResult], name: &str, key: &str) -> String {
    for r in results {
        if eq_fold(r.name.trim(), name.trim()) {
            return r.logo_url.clone();
        }
    }
    for r in results {
        let rname = r.name.to_lowercase();
        if rname.contains(key) || key.contains(&rname) {
            return r.logo_url.clone();
        }
    }
    results
        .first()
        .map(|r| r.logo_url.clone())
        .unwrap_or_default()
}
