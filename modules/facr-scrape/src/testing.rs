//! Test doubles for the two network boundaries: page fetching and club
//! search. HashMap-backed, deterministic, no I/O.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use facr_common::{FacrError, Result, SearchResult};

use crate::fetch::PageFetcher;
use crate::search::ClubSearch;

/// URL → fixture body fetcher. Unregistered URLs return a fetch error;
/// URLs registered with a status return `UpstreamStatus`.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    statuses: HashMap<String, u16>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.statuses.insert(url.to_string(), status);
        self
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        if let Some(status) = self.statuses.get(url) {
            return Err(FacrError::UpstreamStatus(*status));
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FacrError::Fetch(format!("no fixture for {url}")))
    }
}

/// Search stub returning a fixed result list (or a transport error),
/// counting calls so tests can assert on cache behavior.
pub struct StaticSearch {
    results: Vec<SearchResult>,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticSearch {
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            results: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClubSearch for StaticSearch {
    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FacrError::Fetch("search unavailable".to_string()));
        }
        Ok(self.results.clone())
    }
}
