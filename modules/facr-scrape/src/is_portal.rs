//! Adapter for the IS portal competition detail pages
//! (is.fotbal.cz/public/souteze/detail-souteze.aspx). The portal often
//! carries alias/canonical team names missing from the public site, so its
//! output is preferred during reconciliation.

use std::sync::LazyLock;

use facr_common::{ClubType, Match};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::dump;
use crate::fetch::PageFetcher;
use crate::ident::extract_uuid;
use crate::involvement::ClubFilter;
use crate::logo::LogoResolver;
use crate::urls::{match_report_url, IS_BASE};
use crate::util::{normalize_score, truncate_at_paren};

static ROW_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.soutez-zapasy tr").expect("valid selector"));
static TH_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));
static TD_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));
static A_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));

const REPORT_MARKER: &str = "zapis-o-utkani-report.aspx";
const DELEGATION_MARKER: &str = "zapas-delegace-report.aspx";

/// Fetches an IS detail page and returns the club-filtered matches with
/// logos resolved. Fetch failures degrade to an empty list.
pub async fn competition_matches(
    fetcher: &dyn PageFetcher,
    logos: &LogoResolver,
    detail_url: &str,
    club_type: ClubType,
    filter: &ClubFilter,
) -> Vec<Match> {
    let html = match fetcher.fetch(detail_url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(url = detail_url, error = %e, "IS matches fetch failed");
            return Vec::new();
        }
    };
    if dump::enabled() {
        dump::save(&dump_filename(detail_url), &html);
    }

    let mut matches = parse_matches(&html, club_type, filter);
    logos.attach_match_logos(&mut matches).await;
    matches
}

/// Parses the match rows of an IS competition detail page.
pub fn parse_matches(html: &str, club_type: ClubType, filter: &ClubFilter) -> Vec<Match> {
    let doc = Html::parse_document(html);
    let mut matches = Vec::new();
    let mut total_rows = 0;

    for tr in doc.select(&ROW_SEL) {
        if tr.select(&TH_SEL).next().is_some() {
            continue;
        }
        let tds: Vec<ElementRef<'_>> = tr.select(&TD_SEL).collect();
        if tds.len() < 5 {
            continue;
        }
        total_rows += 1;

        let date_time = cell_text(&tds[0]);
        let home = truncate_at_paren(&cell_text(&tds[1]));
        let away = truncate_at_paren(&cell_text(&tds[2]));
        let home_id = first_link_uuid(&tds[1]);
        let away_id = first_link_uuid(&tds[2]);
        let score = normalize_score(&cell_text(&tds[3]));
        let venue = cell_text(&tds[4]);

        // The last column carries the detail links; earlier columns are
        // optional and shift, so the position of this one is the only
        // stable anchor.
        let mut match_id: Option<String> = None;
        let mut report_href: Option<String> = None;
        let mut delegation_href: Option<String> = None;
        for a in tds[tds.len() - 1].select(&A_SEL) {
            let href = a.value().attr("href").unwrap_or("").trim();
            if href.is_empty() {
                continue;
            }
            if let Some(id) = query_param(href, "zapas").filter(|id| !id.is_empty()) {
                match_id = Some(id);
            }
            if href.contains(REPORT_MARKER) {
                report_href = Some(resolve_is_url(href));
            }
            if href.contains(DELEGATION_MARKER) {
                delegation_href = Some(resolve_is_url(href));
            }
        }

        // A direct report link from the portal beats the synthesized one.
        let report_url = report_href.or_else(|| {
            match_id
                .as_deref()
                .map(|id| match_report_url(club_type, id))
        });

        matches.push(Match {
            date_time,
            home,
            home_id,
            home_logo_url: None,
            away,
            away_id,
            away_logo_url: None,
            score,
            venue,
            note: None,
            match_id: match_id.unwrap_or_default(),
            report_url,
            delegation_url: delegation_href,
        });
    }

    filter.retain_and_backfill(&mut matches);
    debug!(total_rows, kept = matches.len(), "IS parse summary");
    matches
}

/// Rewrites an IS portal link to the canonical public host and path.
/// Relative links resolve against `https://is.fotbal.cz/public/`.
pub fn resolve_is_url(href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        let Ok(mut u) = Url::parse(href) else {
            return href.to_string();
        };
        let _ = u.set_scheme("https");
        let _ = u.set_host(Some("is.fotbal.cz"));
        if !u.path().starts_with("/public/") && u.path().starts_with("/zapasy/") {
            u.set_path(&format!("/public{}", u.path()));
        }
        let pairs: Vec<(String, String)> = u
            .query_pairs()
            .filter(|(key, _)| key != "discipline")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        if pairs.is_empty() {
            u.set_query(None);
        } else {
            u.query_pairs_mut().clear().extend_pairs(pairs);
        }
        return u.to_string();
    }

    let mut rest = href.strip_prefix("./").unwrap_or(href);
    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped;
    }
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    format!("{IS_BASE}/public/{rest}")
}

fn cell_text(td: &ElementRef<'_>) -> String {
    td.text().collect::<String>().trim().to_string()
}

fn first_link_uuid(td: &ElementRef<'_>) -> Option<String> {
    let a = td.select(&A_SEL).next()?;
    extract_uuid(a.value().attr("href").unwrap_or(""))
}

/// Reads one query parameter out of a possibly-relative href.
fn query_param(href: &str, key: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn dump_filename(detail_url: &str) -> String {
    if let Ok(u) = Url::parse(detail_url) {
        let req = u
            .query_pairs()
            .find(|(k, _)| k == "req")
            .map(|(_, v)| v.into_owned());
        let sport = u
            .query_pairs()
            .find(|(k, _)| k == "sport")
            .map(|(_, v)| v.into_owned());
        if let Some(req) = req.filter(|r| !r.is_empty()) {
            return format!("is_comp_{}_{}.html", req, sport.unwrap_or_default());
        }
    }
    "is_detail.html".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUB_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    const AWAY_ID: &str = "11111111-1111-1111-1111-111111111111";
    const MATCH_ID: &str = "22222222-2222-2222-2222-222222222222";

    fn page() -> String {
        format!(
            r#"
            <html><body>
            <table class="soutez-zapasy">
              <tr><th>Datum</th><th>Domácí</th><th>Hosté</th><th>Skóre</th><th>Hřiště</th><th></th></tr>
              <tr>
                <td>12.08.2023 18:00</td>
                <td><a href="club.aspx?club={CLUB_ID}">FC Krnov (B)</a></td>
                <td><a href="club.aspx?club={AWAY_ID}">Sparta Praha</a></td>
                <td>2 : 1</td>
                <td>Městský stadion Krnov</td>
                <td>
                  <a href="./zapasy/zapis-o-utkani.aspx?zapas={MATCH_ID}">detail</a>
                  <a href="http://is.fotbal.cz/zapasy/zapis-o-utkani-report.aspx?zapas={MATCH_ID}&amp;discipline=f">zápis</a>
                  <a href="../zapasy/zapas-delegace-report.aspx?zapas={MATCH_ID}">delegace</a>
                </td>
              </tr>
              <tr>
                <td>19.08.2023 17:00</td>
                <td>Baník Ostrava</td>
                <td>Slavia Praha</td>
                <td></td>
                <td>Bazaly</td>
                <td></td>
              </tr>
              <tr><td>short row</td></tr>
            </table>
            </body></html>
            "#
        )
    }

    #[test]
    fn parses_rows_with_links() {
        let filter = ClubFilter::new("FC Krnov", CLUB_ID);
        let matches = parse_matches(&page(), ClubType::Football, &filter);
        assert_eq!(matches.len(), 1);

        let m = &matches[0];
        assert_eq!(m.home, "FC Krnov");
        assert_eq!(m.away, "Sparta Praha");
        assert_eq!(m.home_id.as_deref(), Some(CLUB_ID));
        assert_eq!(m.away_id.as_deref(), Some(AWAY_ID));
        assert_eq!(m.score, "2:1");
        assert_eq!(m.venue, "Městský stadion Krnov");
        assert_eq!(m.match_id, MATCH_ID);
        // The direct portal report link wins over the synthesized one.
        assert_eq!(
            m.report_url.as_deref(),
            Some(
                format!("https://is.fotbal.cz/public/zapasy/zapis-o-utkani-report.aspx?zapas={MATCH_ID}")
                    .as_str()
            )
        );
        assert_eq!(
            m.delegation_url.as_deref(),
            Some(
                format!("https://is.fotbal.cz/public/zapasy/zapas-delegace-report.aspx?zapas={MATCH_ID}")
                    .as_str()
            )
        );
    }

    #[test]
    fn unfiltered_rows_keep_unplayed_matches() {
        let matches = parse_matches(&page(), ClubType::Football, &ClubFilter::default());
        assert_eq!(matches.len(), 2);
        let m = &matches[1];
        assert_eq!(m.score, "");
        assert_eq!(m.match_id, "");
        assert_eq!(m.report_url, None);
        assert_eq!(m.home_id, None);
    }

    #[test]
    fn synthesized_report_when_no_direct_link() {
        let html = format!(
            r#"<table class="soutez-zapasy"><tr>
                <td>d</td><td>A</td><td>B</td><td>1:0</td><td>v</td>
                <td><a href="zapis.aspx?zapas={MATCH_ID}">detail</a></td>
            </tr></table>"#
        );
        let matches = parse_matches(&html, ClubType::Futsal, &ClubFilter::default());
        assert_eq!(
            matches[0].report_url.as_deref(),
            Some(format!("https://www.fotbal.cz/futsal/zapasy/futsal/{MATCH_ID}").as_str())
        );
    }

    #[test]
    fn resolve_absolute_url() {
        assert_eq!(
            resolve_is_url("http://example.com/zapasy/zapis-o-utkani-report.aspx?zapas=1&discipline=f"),
            "https://is.fotbal.cz/public/zapasy/zapis-o-utkani-report.aspx?zapas=1"
        );
        // Already-public paths are left alone.
        assert_eq!(
            resolve_is_url("https://is.fotbal.cz/public/zapasy/x.aspx?a=1"),
            "https://is.fotbal.cz/public/zapasy/x.aspx?a=1"
        );
        // Non-match paths are not prefixed.
        assert_eq!(
            resolve_is_url("https://is.fotbal.cz/jine/x.aspx"),
            "https://is.fotbal.cz/jine/x.aspx"
        );
    }

    #[test]
    fn resolve_relative_url() {
        assert_eq!(
            resolve_is_url("./zapasy/x.aspx?zapas=1"),
            "https://is.fotbal.cz/public/zapasy/x.aspx?zapas=1"
        );
        assert_eq!(
            resolve_is_url("../../zapasy/x.aspx"),
            "https://is.fotbal.cz/public/zapasy/x.aspx"
        );
        assert_eq!(
            resolve_is_url("/zapasy/x.aspx"),
            "https://is.fotbal.cz/public/zapasy/x.aspx"
        );
    }

    #[test]
    fn query_param_reads_relative_hrefs() {
        assert_eq!(
            query_param("zapis.aspx?zapas=abc&x=1", "zapas").as_deref(),
            Some("abc")
        );
        assert_eq!(query_param("zapis.aspx", "zapas"), None);
    }
}
