//! Standings table extraction from the IS portal
//! (is.fotbal.cz/public/souteze/tabulky-souteze.aspx).

use std::sync::LazyLock;

use facr_common::TableRow;
use scraper::{ElementRef, Html, Selector};

use crate::ident::extract_uuid;
use crate::logo::LogoResolver;
use crate::names::eq_fold;
use crate::util::normalize_score;

/// Section header of the overall table; other sections (home/away splits)
/// are not published consistently and are skipped.
pub const OVERALL_SECTION: &str = "Tabulka celková";

static H3_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3").expect("valid selector"));
static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table.vysledky-tabulky tbody tr").expect("valid selector")
});
static TH_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));
static TD_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));
static A_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// Parses the ranked rows of one labeled section. Header rows and rows
/// with too few columns are skipped. Logos are attached separately.
pub fn parse_section(html: &str, header: &str) -> Vec<TableRow> {
    let doc = Html::parse_document(html);
    let mut rows = Vec::new();

    for h3 in doc.select(&H3_SEL) {
        let text = h3.text().collect::<String>();
        if !eq_fold(text.trim(), header) {
            continue;
        }
        // The table sits in the first following `div.list.tabulky` sibling.
        let Some(list) = h3
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(is_table_list)
        else {
            break;
        };
        for tr in list.select(&ROW_SEL) {
            if tr.select(&TH_SEL).next().is_some() {
                continue;
            }
            let tds: Vec<ElementRef<'_>> = tr.select(&TD_SEL).collect();
            if tds.len() < 8 {
                continue;
            }
            let get = |i: usize| tds[i].text().collect::<String>().trim().to_string();

            let team_id = tds[1]
                .select(&A_SEL)
                .next()
                .and_then(|a| extract_uuid(a.value().attr("href").unwrap_or("")));

            rows.push(TableRow {
                rank: get(0),
                team: get(1),
                team_id,
                team_logo_url: None,
                played: get(2),
                wins: get(3),
                draws: get(4),
                losses: get(5),
                score: normalize_score(&get(6)),
                points: get(7),
            });
        }
        break;
    }

    rows
}

/// Resolves every row's team logo in place.
pub async fn attach_logos(rows: &mut [TableRow], logos: &LogoResolver) {
    for row in rows {
        row.team_logo_url = Some(logos.resolve(&row.team, row.team_id.as_deref()).await);
    }
}

fn is_table_list(el: &ElementRef<'_>) -> bool {
    let mut has_list = false;
    let mut has_tabulky = false;
    for class in el.value().classes() {
        has_list |= class == "list";
        has_tabulky |= class == "tabulky";
    }
    el.value().name() == "div" && has_list && has_tabulky
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAM_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn page() -> String {
        format!(
            r#"
            <html><body>
            <h3>Tabulka doma</h3>
            <div class="list tabulky">
              <table class="vysledky-tabulky"><tbody>
                <tr><td>99</td><td>Wrong section</td><td>0</td><td>0</td><td>0</td><td>0</td><td>0:0</td><td>0</td></tr>
              </tbody></table>
            </div>
            <h3> tabulka CELKOVÁ </h3>
            <div class="list tabulky">
              <table class="vysledky-tabulky"><tbody>
                <tr><th>#</th><th>Tým</th></tr>
                <tr>
                  <td>1</td>
                  <td><a href="/club/{TEAM_ID}">FC Krnov</a></td>
                  <td>10</td><td>8</td><td>2</td><td>0</td>
                  <td>25 : 5</td><td>26</td>
                </tr>
                <tr>
                  <td>2</td>
                  <td>Sparta Praha</td>
                  <td>10</td><td>7</td><td>2</td><td>1</td>
                  <td>20:8</td><td>23</td>
                </tr>
                <tr><td>bad</td><td>row</td></tr>
              </tbody></table>
            </div>
            </body></html>
            "#
        )
    }

    #[test]
    fn targets_the_right_section() {
        let rows = parse_section(&page(), OVERALL_SECTION);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team, "FC Krnov");
        assert_eq!(rows[0].team_id.as_deref(), Some(TEAM_ID));
        assert_eq!(rows[0].rank, "1");
        assert_eq!(rows[0].played, "10");
        assert_eq!(rows[0].score, "25:5");
        assert_eq!(rows[0].points, "26");
        assert_eq!(rows[1].team_id, None);
        assert_eq!(rows[1].score, "20:8");
    }

    #[test]
    fn missing_section_yields_no_rows() {
        assert!(parse_section(&page(), "Tabulka venku").is_empty());
        assert!(parse_section("<html></html>", OVERALL_SECTION).is_empty());
    }
}
