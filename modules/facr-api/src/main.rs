use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use facr_common::Config;
use facr_scrape::{ClubSearch, FotbalSearch, HttpFetcher, LogoCache, LogoResolver, PageFetcher};

mod docs;
mod rest;

pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub search: Arc<dyn ClubSearch>,
    pub logos: LogoResolver,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("facr=info".parse()?))
        .init();

    let config = Config::from_env();

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(config.fetch_timeout));
    let search: Arc<dyn ClubSearch> = Arc::new(FotbalSearch::new(fetcher.clone()));
    let logos = LogoResolver::new(Arc::new(LogoCache::new()), search.clone());

    let state = Arc::new(AppState {
        fetcher,
        search,
        logos,
    });

    let app = Router::new()
        .route("/", get(docs::docs_handler))
        .route("/club/search", get(rest::club_search))
        .route("/club/{id}", get(rest::club_redirect))
        .route("/club/{type}/{id}", get(rest::club_info))
        .route("/club/{type}/{id}/table", get(rest::club_tables))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = addr.as_str(), "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
