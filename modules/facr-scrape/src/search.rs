//! Club directory search against the federation's search page.

use std::sync::Arc;
use std::sync::LazyLock;

use async_trait::async_trait;
use facr_common::{ClubType, FacrError, Result, SearchResult};
use facr_common::none_if_empty;
use scraper::{Html, Selector};
use tracing::warn;

use crate::fetch::PageFetcher;
use crate::urls::{search_url, FOTBAL_BASE};

static ITEM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.ListItemSplit").expect("valid selector"));
static LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.Link--inverted").expect("valid selector"));
static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.H7").expect("valid selector"));
static IMG_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid selector"));
static CATEGORY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ClubCategories .BadgeCategory").expect("valid selector"));
static ADDRESS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ClubAddress p").expect("valid selector"));

/// Name-search capability behind the logo resolver and the search endpoint.
#[async_trait]
pub trait ClubSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Production search: scrapes the fotbal.cz club search page.
pub struct FotbalSearch {
    fetcher: Arc<dyn PageFetcher>,
}

impl FotbalSearch {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ClubSearch for FotbalSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        match self.fetcher.fetch(&search_url(query)).await {
            Ok(html) => Ok(parse_search_page(&html)),
            Err(FacrError::UpstreamStatus(status)) => {
                // The search backend chokes on very short tokens; retry
                // once, quoting the whole query when one is present.
                let retry_query = if query.split_whitespace().any(|t| t.chars().count() <= 2) {
                    format!("\"{query}\"")
                } else {
                    query.to_string()
                };
                warn!(query, status, "search returned non-200, retrying");
                match self.fetcher.fetch(&search_url(&retry_query)).await {
                    Ok(html) => Ok(parse_search_page(&html)),
                    // Treat a second non-200 as no results rather than an error.
                    Err(FacrError::UpstreamStatus(_)) => Ok(Vec::new()),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }
}

/// Parses the "Výsledky hledání" club listing.
pub fn parse_search_page(html: &str) -> Vec<SearchResult> {
    let doc = Html::parse_document(html);
    let mut results = Vec::new();

    for li in doc.select(&ITEM_SEL) {
        let Some(a) = li.select(&LINK_SEL).next() else {
            continue;
        };
        let href = a.value().attr("href").unwrap_or("").trim();
        if href.is_empty() {
            continue;
        }

        let mut name = a
            .select(&NAME_SEL)
            .next()
            .map(|s| s.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            // fallback to link text
            name = a.text().collect::<String>().trim().to_string();
        }

        let logo_url = a
            .select(&IMG_SEL)
            .next()
            .and_then(|img| img.value().attr("src"))
            .unwrap_or("")
            .to_string();

        let category = li
            .select(&CATEGORY_SEL)
            .next()
            .map(|s| s.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let address = li
            .select(&ADDRESS_SEL)
            .next()
            .map(|s| s.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let club_type = if href.to_lowercase().contains("/futsal/") {
            ClubType::Futsal
        } else {
            ClubType::Football
        };

        // Club id is the last path segment of the club link.
        let club_id = href
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .to_string();

        let url = if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{FOTBAL_BASE}{href}")
        };

        results.push(SearchResult {
            name,
            club_id,
            club_type,
            url,
            logo_url,
            category: none_if_empty(category),
            address: none_if_empty(address),
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticFetcher;

    const SEARCH_PAGE: &str = r#"
      <html><body>
        <ul>
          <li class="ListItemSplit">
            <a class="Link--inverted" href="/souteze/club/club/3fa85f64-5717-4562-b3fc-2c963f66afa6">
              <img src="https://img/krnov.png" />
              <span class="H7">FC Krnov</span>
            </a>
            <div class="ClubCategories"><span class="BadgeCategory">Muži</span></div>
            <div class="ClubAddress"><p>Krnov, Za Drahou 1</p></div>
          </li>
          <li class="ListItemSplit">
            <a class="Link--inverted" href="https://www.fotbal.cz/futsal/club/club/11111111-1111-1111-1111-111111111111">
              Futsal Krnov
            </a>
          </li>
          <li class="ListItemSplit"><a class="Link--inverted" href="">dead entry</a></li>
        </ul>
      </body></html>
    "#;

    #[test]
    fn parses_club_listing() {
        let results = parse_search_page(SEARCH_PAGE);
        assert_eq!(results.len(), 2);

        let first = &results[0];
        assert_eq!(first.name, "FC Krnov");
        assert_eq!(first.club_id, "3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert_eq!(first.club_type, ClubType::Football);
        assert_eq!(
            first.url,
            "https://www.fotbal.cz/souteze/club/club/3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
        assert_eq!(first.logo_url, "https://img/krnov.png");
        assert_eq!(first.category.as_deref(), Some("Muži"));
        assert_eq!(first.address.as_deref(), Some("Krnov, Za Drahou 1"));

        let second = &results[1];
        assert_eq!(second.name, "Futsal Krnov");
        assert_eq!(second.club_type, ClubType::Futsal);
        assert_eq!(second.club_id, "11111111-1111-1111-1111-111111111111");
        assert_eq!(second.logo_url, "");
    }

    #[test]
    fn empty_page_yields_no_results() {
        assert!(parse_search_page("<html><body></body></html>").is_empty());
    }

    #[tokio::test]
    async fn retries_once_on_upstream_error() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .with_status(&search_url("FK Aš"), 404)
                .with_page(&search_url("\"FK Aš\""), SEARCH_PAGE),
        );
        let search = FotbalSearch::new(fetcher);
        let results = search.search("FK Aš").await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn double_failure_is_empty_not_error() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .with_status(&search_url("Sparta"), 500)
                .with_status(&search_url("Sparta"), 500),
        );
        let search = FotbalSearch::new(fetcher);
        assert!(search.search("Sparta").await.unwrap().is_empty());
    }
}
