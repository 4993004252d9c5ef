//! URL templates for the federation's public site and its IS portal.

use facr_common::ClubType;
use url::Url;

pub const FOTBAL_BASE: &str = "https://www.fotbal.cz";
pub const IS_BASE: &str = "https://is.fotbal.cz";

/// Club detail page on the public site.
pub fn club_page_url(club_type: ClubType, club_id: &str) -> String {
    match club_type {
        ClubType::Football => format!("{FOTBAL_BASE}/souteze/club/club/{club_id}"),
        ClubType::Futsal => format!("{FOTBAL_BASE}/futsal/club/club/{club_id}"),
    }
}

/// Public competition page carrying both the schedule and the table.
pub fn competition_table_url(club_type: ClubType, comp_id: &str) -> String {
    match club_type {
        ClubType::Football => format!("{FOTBAL_BASE}/souteze/turnaje/table/{comp_id}"),
        ClubType::Futsal => format!("{FOTBAL_BASE}/futsal/futsal/table/{comp_id}"),
    }
}

/// IS portal page listing every match of a competition.
pub fn is_detail_url(comp_id: &str, club_type: ClubType) -> String {
    format!(
        "{IS_BASE}/public/souteze/detail-souteze.aspx?req={comp_id}&sport={}",
        club_type.sport_param()
    )
}

/// IS portal standings page for a competition.
pub fn is_standings_url(comp_id: &str, club_type: ClubType) -> String {
    format!(
        "{IS_BASE}/public/souteze/tabulky-souteze.aspx?req={comp_id}&sport={}",
        club_type.sport_param()
    )
}

/// Public match report page, derived from a match identifier.
pub fn match_report_url(club_type: ClubType, match_id: &str) -> String {
    match club_type {
        ClubType::Futsal => format!("{FOTBAL_BASE}/futsal/zapasy/futsal/{match_id}"),
        ClubType::Football => format!("{FOTBAL_BASE}/souteze/zapasy/zapas/{match_id}"),
    }
}

/// Official club media logo, keyed by the stable club/team identifier.
/// Identifier-based resolution never collides, unlike name search.
pub fn media_logo_url(team_id: &str) -> String {
    format!("https://is1.fotbal.cz/media/kluby/{team_id}/{team_id}_crop.jpg")
}

/// Club search page with the query percent-encoded.
pub fn search_url(query: &str) -> String {
    let mut u = Url::parse(FOTBAL_BASE).expect("valid base url");
    u.set_path("/club/hledej");
    u.query_pairs_mut().append_pair("q", query);
    u.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_url_branches_on_discipline() {
        let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        assert_eq!(
            match_report_url(ClubType::Football, id),
            format!("https://www.fotbal.cz/souteze/zapasy/zapas/{id}")
        );
        assert_eq!(
            match_report_url(ClubType::Futsal, id),
            format!("https://www.fotbal.cz/futsal/zapasy/futsal/{id}")
        );
    }

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            search_url("FC Krnov"),
            "https://www.fotbal.cz/club/hledej?q=FC+Krnov"
        );
    }
}
