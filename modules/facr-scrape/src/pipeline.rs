//! Per-club orchestration: fetch the club page, then enrich each
//! competition from both match sources (info) or the standings table
//! (tables). Competitions are processed sequentially in source-listing
//! order; one competition's failure never aborts the rest.

use facr_common::{none_if_empty, ClubInfo, ClubType, CompetitionTable, Result};
use tracing::warn;

use crate::club::parse_club_page;
use crate::fetch::PageFetcher;
use crate::fotbal;
use crate::involvement::ClubFilter;
use crate::is_portal;
use crate::logo::LogoResolver;
use crate::reconcile::reconcile;
use crate::standings;
use crate::urls;

/// Club info with reconciled matches per competition.
pub async fn club_with_matches(
    fetcher: &dyn PageFetcher,
    logos: &LogoResolver,
    club_type: ClubType,
    club_id: &str,
) -> Result<ClubInfo> {
    let club_url = urls::club_page_url(club_type, club_id);
    let html = fetcher.fetch(&club_url).await?;
    let page = parse_club_page(&html, club_type);

    let filter = ClubFilter::new(page.name.clone(), club_id);
    let mut competitions = page.competitions;
    for comp in &mut competitions {
        let public =
            fotbal::competition_matches(fetcher, logos, &comp.matches_link, club_type, &filter)
                .await;
        let detail_url = urls::is_detail_url(&comp.id, club_type);
        let portal =
            is_portal::competition_matches(fetcher, logos, &detail_url, club_type, &filter).await;
        comp.matches = reconcile(public, portal);
    }

    let category = match club_type {
        ClubType::Football => "Fotbal",
        ClubType::Futsal => "Futsal",
    };

    Ok(ClubInfo {
        name: page.name,
        club_id: club_id.to_string(),
        club_type,
        club_internal_id: none_if_empty(page.internal_id),
        url: Some(club_url),
        logo_url: Some(urls::media_logo_url(club_id)),
        address: none_if_empty(page.postal_address),
        category: Some(category.to_string()),
        competitions,
    })
}

/// Club info with the overall standings table per competition, no matches.
pub async fn club_with_tables(
    fetcher: &dyn PageFetcher,
    logos: &LogoResolver,
    club_type: ClubType,
    club_id: &str,
) -> Result<ClubInfo> {
    let club_url = urls::club_page_url(club_type, club_id);
    let html = fetcher.fetch(&club_url).await?;
    let page = parse_club_page(&html, club_type);

    let mut competitions = page.competitions;
    for comp in &mut competitions {
        let table_url = urls::is_standings_url(&comp.id, club_type);
        let html = match fetcher.fetch(&table_url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(competition = comp.id.as_str(), error = %e, "standings fetch failed");
                continue;
            }
        };
        let mut rows = standings::parse_section(&html, standings::OVERALL_SECTION);
        standings::attach_logos(&mut rows, logos).await;
        comp.table = Some(CompetitionTable { overall: rows });
    }

    Ok(ClubInfo {
        name: page.name,
        club_id: club_id.to_string(),
        club_type,
        club_internal_id: none_if_empty(page.internal_id),
        url: none_if_empty(page.url),
        logo_url: none_if_empty(page.logo_url),
        address: none_if_empty(page.address),
        category: none_if_empty(page.category),
        competitions,
    })
}
