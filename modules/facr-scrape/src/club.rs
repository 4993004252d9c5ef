//! Club detail page extraction: name, internal id, and the competition
//! listing that drives all per-competition enrichment.

use std::sync::LazyLock;

use facr_common::{ClubType, Competition};
use scraper::{ElementRef, Html, Selector};

use crate::urls::competition_table_url;

static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1.H4 span").expect("valid selector"));
static NAME_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1.H4 a").expect("valid selector"));
static LOGO_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img.Logo").expect("valid selector"));
static SECTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section").expect("valid selector"));
static SECTION_HEADER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3 span").expect("valid selector"));
static SECTION_ITEM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul li").expect("valid selector"));
static ADDRESS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ClubAddress p").expect("valid selector"));
static COMP_ROW_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.Table tbody tr").expect("valid selector"));
static TD_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));
static A_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// Everything scraped off a club page. The info and table endpoints pick
/// different subsets (one synthesizes metadata, the other reports the
/// scraped values).
#[derive(Debug, Clone, Default)]
pub struct ClubPage {
    pub name: String,
    /// The federation's numeric member id, from the "ID klubu" section.
    pub internal_id: String,
    /// Href of the club name link, when the page carries one.
    pub url: String,
    pub logo_url: String,
    /// First section header, used as a category label.
    pub category: String,
    /// First section line, usually the registered address.
    pub address: String,
    /// Address from the contact block.
    pub postal_address: String,
    pub competitions: Vec<Competition>,
}

pub fn parse_club_page(html: &str, club_type: ClubType) -> ClubPage {
    let doc = Html::parse_document(html);

    let name = first_text(doc.select(&NAME_SEL).next());
    let url = doc
        .select(&NAME_LINK_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or("")
        .trim()
        .to_string();
    let logo_url = doc
        .select(&LOGO_SEL)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or("")
        .trim()
        .to_string();

    let mut internal_id = String::new();
    for section in doc.select(&SECTION_SEL) {
        if first_text(section.select(&SECTION_HEADER_SEL).next()) == "ID klubu" {
            internal_id = first_text(section.select(&SECTION_ITEM_SEL).next());
        }
    }

    let (category, address) = doc
        .select(&SECTION_SEL)
        .next()
        .map(|section| {
            (
                first_text(section.select(&SECTION_HEADER_SEL).next()),
                first_text(section.select(&SECTION_ITEM_SEL).next()),
            )
        })
        .unwrap_or_default();

    let postal_address = first_text(doc.select(&ADDRESS_SEL).next());

    let mut competitions = Vec::new();
    for tr in doc.select(&COMP_ROW_SEL) {
        let tds: Vec<ElementRef<'_>> = tr.select(&TD_SEL).collect();
        if tds.len() < 3 {
            continue;
        }
        let code = cell_text(&tds[0]);
        let name_link = tds[1].select(&A_SEL).next();
        let comp_name = first_text(name_link);
        let href = name_link
            .and_then(|a| a.value().attr("href"))
            .unwrap_or("")
            .trim();
        let team_count = cell_text(&tds[2]);

        // Competition id is the last path segment of the listing link.
        let id = href
            .rsplit_once('/')
            .map(|(_, last)| last.to_string())
            .unwrap_or_default();

        let matches_link = competition_table_url(club_type, &id);

        competitions.push(Competition {
            id,
            code,
            name: comp_name,
            team_count,
            matches_link,
            matches: Vec::new(),
            table: None,
        });
    }

    ClubPage {
        name,
        internal_id,
        url,
        logo_url,
        category,
        address,
        postal_address,
        competitions,
    }
}

fn first_text(el: Option<ElementRef<'_>>) -> String {
    el.map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn cell_text(td: &ElementRef<'_>) -> String {
    td.text().collect::<String>().trim().to_string()
}
