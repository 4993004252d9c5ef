//! Decides whether a scraped row concerns the queried club, and repairs
//! missing identifiers once involvement is established.

use facr_common::Match;

use crate::names::{contains_fold, eq_fold, simplify_club_query};

/// Club context a result set is filtered against. Either field may be
/// empty; a fully empty filter retains every row (bare listing mode).
#[derive(Debug, Clone, Default)]
pub struct ClubFilter {
    pub name: String,
    pub id: String,
}

impl ClubFilter {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// No club context: match everything.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.id.is_empty()
    }

    /// Involvement check, in priority order: identifier equality on either
    /// side, then full-name equality/containment, then the simplified
    /// token. Identifiers win because display names collide across
    /// same-named clubs in different leagues.
    pub fn involves(&self, m: &Match) -> bool {
        if self.is_empty() {
            return true;
        }
        if !self.id.is_empty() {
            let id_hit = [&m.home_id, &m.away_id]
                .into_iter()
                .flatten()
                .any(|id| eq_fold(id, &self.id));
            if id_hit {
                return true;
            }
        }
        if self.name.is_empty() {
            return false;
        }
        if self.name_matches(&m.home) || self.name_matches(&m.away) {
            return true;
        }
        let token = simplify_club_query(&self.name);
        !token.is_empty() && (contains_fold(&m.home, &token) || contains_fold(&m.away, &token))
    }

    /// Assigns the queried club's id to whichever side lacks one and
    /// matches the club by name or token. Adapters omit identifiers for
    /// the club's own team on its club page; this repairs them. Only call
    /// on rows already judged involved.
    pub fn backfill(&self, m: &mut Match) {
        if m.home_id.is_none() && self.side_matches(&m.home) && !self.id.is_empty() {
            m.home_id = Some(self.id.clone());
        }
        if m.away_id.is_none() && self.side_matches(&m.away) && !self.id.is_empty() {
            m.away_id = Some(self.id.clone());
        }
    }

    fn name_matches(&self, team: &str) -> bool {
        eq_fold(team, &self.name)
            || contains_fold(&self.name, team)
            || contains_fold(team, &self.name)
    }

    fn side_matches(&self, team: &str) -> bool {
        if self.name_matches(team) {
            return true;
        }
        let token = simplify_club_query(&self.name);
        !token.is_empty() && contains_fold(team, &token)
    }

    /// Applies the filter and backfill to an adapter's raw rows.
    pub fn retain_and_backfill(&self, matches: &mut Vec<Match>) {
        matches.retain(|m| self.involves(m));
        for m in matches {
            self.backfill(m);
        }
    }
}
