use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use facr_common::{ClubType, FacrError};
use facr_scrape::pipeline;

use crate::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

/// GET /club/search?q=
pub async fn club_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let q = params.q.unwrap_or_default().trim().to_string();
    if q.is_empty() {
        return (StatusCode::BAD_REQUEST, "query parameter 'q' is required").into_response();
    }

    match state.search.search(&q).await {
        Ok(results) => Json(serde_json::json!({
            "query": q,
            "count": results.len(),
            "results": results,
        }))
        .into_response(),
        Err(e) => {
            warn!(query = q.as_str(), error = %e, "club search failed");
            (
                StatusCode::BAD_GATEWAY,
                format!("Error fetching search page: {e}"),
            )
                .into_response()
        }
    }
}

/// GET /club/{type}/{id}
pub async fn club_info(
    State(state): State<Arc<AppState>>,
    Path((club_type, club_id)): Path<(String, String)>,
) -> Response {
    let Ok(club_type) = club_type.parse::<ClubType>() else {
        return invalid_club_type();
    };
    if club_id.is_empty() {
        return (StatusCode::BAD_REQUEST, "Club ID is required").into_response();
    }

    match pipeline::club_with_matches(state.fetcher.as_ref(), &state.logos, club_type, &club_id)
        .await
    {
        Ok(info) => Json(info).into_response(),
        Err(e) => club_fetch_error(e),
    }
}

/// GET /club/{type}/{id}/table
pub async fn club_tables(
    State(state): State<Arc<AppState>>,
    Path((club_type, club_id)): Path<(String, String)>,
) -> Response {
    let Ok(club_type) = club_type.parse::<ClubType>() else {
        return invalid_club_type();
    };
    if club_id.is_empty() {
        return (StatusCode::BAD_REQUEST, "Club ID is required").into_response();
    }

    match pipeline::club_with_tables(state.fetcher.as_ref(), &state.logos, club_type, &club_id)
        .await
    {
        Ok(info) => Json(info).into_response(),
        Err(e) => club_fetch_error(e),
    }
}

/// GET /club/{id} — legacy shortcut, defaults the discipline. Only
/// id-shaped segments redirect; anything else is not a route.
pub async fn club_redirect(Path(club_id): Path<String>) -> Response {
    let id_shaped = !club_id.is_empty()
        && club_id
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == '-');
    if !id_shaped {
        return StatusCode::NOT_FOUND.into_response();
    }
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(header::LOCATION, format!("/club/football/{club_id}"))
        .body(axum::body::Body::empty())
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn invalid_club_type() -> Response {
    (
        StatusCode::BAD_REQUEST,
        "Invalid club type. Use 'football' or 'futsal'.",
    )
        .into_response()
}

/// The primary club-page fetch is the one failure surfaced to the caller;
/// an upstream status is relayed as-is.
fn club_fetch_error(e: FacrError) -> Response {
    match e {
        FacrError::UpstreamStatus(code) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
            format!("Error: received status code {code}"),
        )
            .into_response(),
        other => {
            warn!(error = %other, "club page fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching club data: {other}"),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facr_scrape::testing::{StaticFetcher, StaticSearch};
    use facr_scrape::{LogoCache, LogoResolver};

    fn state() -> Arc<AppState> {
        let fetcher = Arc::new(StaticFetcher::new());
        let search = Arc::new(StaticSearch::with_results(Vec::new()));
        Arc::new(AppState {
            fetcher,
            logos: LogoResolver::new(Arc::new(LogoCache::new()), search.clone()),
            search,
        })
    }

    #[tokio::test]
    async fn unknown_club_type_is_bad_request() {
        let resp = club_info(
            State(state()),
            Path(("beachsoccer".to_string(), "abc".to_string())),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn blank_search_query_is_bad_request() {
        let resp = club_search(State(state()), Query(SearchQuery { q: None })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = club_search(
            State(state()),
            Query(SearchQuery {
                q: Some("   ".to_string()),
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn redirect_defaults_to_football() {
        let resp = club_redirect(Path("3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string())).await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/club/football/3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[tokio::test]
    async fn redirect_rejects_non_id_segments() {
        let resp = club_redirect(Path("not a club id".to_string())).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_club_page_relays_status() {
        let resp = club_info(
            State(state()),
            Path(("football".to_string(), "no-such-club".to_string())),
        )
        .await;
        // StaticFetcher has no fixture: a transport-level failure maps to 500.
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
