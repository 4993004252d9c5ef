//! Chooses which source's match list is authoritative for a competition.

use facr_common::Match;

/// The IS portal wins outright whenever it produced anything: it carries
/// alias/canonical team names the public pages drop, which downstream
/// matching depends on. No field-by-field merging.
pub fn reconcile(public: Vec<Match>, portal: Vec<Match>) -> Vec<Match> {
    if portal.is_empty() {
        public
    } else {
        portal
    }
}
