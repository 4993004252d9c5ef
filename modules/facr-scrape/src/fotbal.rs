//! Adapter for the public fotbal.cz competition pages
//! (e.g. https://www.fotbal.cz/souteze/turnaje/table/{id}).

use std::sync::LazyLock;

use facr_common::{ClubType, Match};
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::dump;
use crate::fetch::PageFetcher;
use crate::ident::extract_uuid;
use crate::involvement::ClubFilter;
use crate::logo::LogoResolver;
use crate::urls::match_report_url;
use crate::util::normalize_score;

static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("section.js-matchRoundSection li.MatchRound").expect("valid selector")
});
static MATCH_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.MatchRound-match").expect("valid selector"));
static TEAM_NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.MatchRound-match ul li span.H7").expect("valid selector"));
static TEAM_IMG_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.MatchRound-match img").expect("valid selector"));
static SCORE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong.H4").expect("valid selector"));
static META_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".MatchRound-meta p").expect("valid selector"));
static DETAIL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".js-matchRoundDetails li p").expect("valid selector"));
static STRONG_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong").expect("valid selector"));

/// Fetches a public competition page and returns the club-filtered matches
/// with logos resolved. Fetch failures degrade to an empty list.
pub async fn competition_matches(
    fetcher: &dyn PageFetcher,
    logos: &LogoResolver,
    page_url: &str,
    club_type: ClubType,
    filter: &ClubFilter,
) -> Vec<Match> {
    let page_url = page_url.trim();
    if page_url.is_empty() {
        return Vec::new();
    }
    let html = match fetcher.fetch(page_url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(url = page_url, error = %e, "fotbal.cz matches fetch failed");
            return Vec::new();
        }
    };
    if dump::enabled() {
        let slug = page_url
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(page_url);
        dump::save(&format!("fotbal_comp_{slug}.html"), &html);
    }

    let mut matches = parse_matches(&html, club_type, filter);
    logos.attach_match_logos(&mut matches).await;
    matches
}

/// Parses the round sections of a public competition page.
pub fn parse_matches(html: &str, club_type: ClubType, filter: &ClubFilter) -> Vec<Match> {
    let doc = Html::parse_document(html);
    let mut matches = Vec::new();

    for li in doc.select(&ROW_SEL) {
        let Some(anchor) = li.select(&MATCH_LINK_SEL).next() else {
            continue;
        };

        let team_names: Vec<String> = li
            .select(&TEAM_NAME_SEL)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect();
        if team_names.len() < 2 {
            continue;
        }
        let home = team_names[0].clone();
        let away = team_names[1].clone();

        // Team ids ride along in the crest img URLs when present.
        let img_ids: Vec<String> = li
            .select(&TEAM_IMG_SEL)
            .filter_map(|img| img.value().attr("src"))
            .filter_map(|src| extract_uuid(src.trim()))
            .collect();
        let home_id = img_ids.first().cloned();
        let away_id = img_ids.get(1).cloned();

        let score = anchor
            .select(&SCORE_SEL)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let score = normalize_score(&score);

        let date_time = li
            .select(&META_SEL)
            .filter_map(|p| labeled_value(p, &["datum"]))
            .last()
            .unwrap_or_default();
        let venue = li
            .select(&DETAIL_SEL)
            .filter_map(|p| labeled_value(p, &["hřiště", "hriste"]))
            .last()
            .unwrap_or_default();

        let match_id = extract_uuid(anchor.value().attr("href").unwrap_or(""));
        let report_url = match_id
            .as_deref()
            .map(|id| match_report_url(club_type, id));

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
            delegation_url: None,
        });
    }

    filter.retain_and_backfill(&mut matches);
    matches
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Pulls the value out of a labeled paragraph like
/// `<p><strong>Datum</strong>: 12.08.2023 18:00</p>`.
fn labeled_value(p: ElementRef<'_>, prefixes: &[&str]) -> Option<String> {
    let label = p.select(&STRONG_SEL).next().map(element_text)?;
    let lower = label.to_lowercase();
    if !prefixes.iter().any(|pre| lower.starts_with(pre)) {
        return None;
    }
    let text = element_text(p);
    Some(text.replace(&format!("{label}:"), "").trim().to_string())
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
            <section class="js-matchRoundSection">
              <ul>
                <li class="MatchRound">
                  <a class="MatchRound-match" href="/souteze/zapasy/zapas/{MATCH_ID}">
                    <img src="https://is1.fotbal.cz/media/kluby/{CLUB_ID}/{CLUB_ID}_crop.jpg" />
                    <img src="https://is1.fotbal.cz/media/kluby/{AWAY_ID}/{AWAY_ID}_crop.jpg" />
                    <ul>
                      <li><span class="H7">FC Krnov</span></li>
                      <li><span class="H7">Sparta Praha</span></li>
                    </ul>
                    <strong class="H4"> 2 : 1 </strong>
                  </a>
                  <div class="MatchRound-meta">
                    <p><strong>Datum</strong>: 12.08.2023 18:00</p>
                  </div>
                  <div class="js-matchRoundDetails">
                    <ul><li><p><strong>Hřiště</strong>: Městský stadion Krnov</p></li></ul>
                  </div>
                </li>
                <li class="MatchRound">
                  <a class="MatchRound-match" href="/souteze/zapasy/zapas/{MATCH_ID}">
                    <ul>
                      <li><span class="H7">Baník Ostrava</span></li>
                      <li><span class="H7">Slavia Praha</span></li>
                    </ul>
                    <strong class="H4">odloženo</strong>
                  </a>
                </li>
                <li class="MatchRound">
                  <a class="MatchRound-match" href="/x">
                    <ul><li><span class="H7">Jediný tým</span></li></ul>
                  </a>
                </li>
              </ul>
            </section>
            </body></html>
            "#
        )
    }

    #[test]
    fn parses_filtered_rows() {
        let filter = ClubFilter::new("FC Krnov", CLUB_ID);
        let matches = parse_matches(&page(), ClubType::Football, &filter);
        assert_eq!(matches.len(), 1);

        let m = &matches[0];
        assert_eq!(m.home, "FC Krnov");
        assert_eq!(m.away, "Sparta Praha");
        assert_eq!(m.home_id.as_deref(), Some(CLUB_ID));
        assert_eq!(m.away_id.as_deref(), Some(AWAY_ID));
        assert_eq!(m.score, "2:1");
        assert_eq!(m.date_time, "12.08.2023 18:00");
        assert_eq!(m.venue, "Městský stadion Krnov");
        assert_eq!(m.match_id, MATCH_ID);
        assert_eq!(
            m.report_url.as_deref(),
            Some(format!("https://www.fotbal.cz/souteze/zapasy/zapas/{MATCH_ID}").as_str())
        );
        assert_eq!(m.delegation_url, None);
    }

    #[test]
    fn no_filter_keeps_all_complete_rows() {
        let matches = parse_matches(&page(), ClubType::Football, &ClubFilter::default());
        // The one-team row is dropped; everything else is retained.
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].home, "Baník Ostrava");
        assert_eq!(matches[1].score, "");
    }

    #[test]
    fn futsal_report_template() {
        let filter = ClubFilter::default();
        let matches = parse_matches(&page(), ClubType::Futsal, &filter);
        assert_eq!(
            matches[0].report_url.as_deref(),
            Some(format!("https://www.fotbal.cz/futsal/zapasy/futsal/{MATCH_ID}").as_str())
        );
    }

    #[test]
    fn empty_page_yields_nothing() {
        let matches = parse_matches("<html></html>", ClubType::Football, &ClubFilter::default());
        assert!(matches.is_empty());
    }
}
