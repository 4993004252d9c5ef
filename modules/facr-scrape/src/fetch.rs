//! Outbound page fetching.

use std::time::Duration;

use async_trait::async_trait;
use facr_common::{FacrError, Result};
use reqwest::header;

/// Browser-like headers; some fotbal.cz pages 404 without them.
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "cs-CZ,cs;q=0.9,en;q=0.8";

/// Boundary for everything that pulls HTML off the network. Tests swap in a
/// fixture-backed implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a page body. Non-200 responses are errors carrying the
    /// upstream status so callers can relay it.
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, BROWSER_UA)
            .header(header::ACCEPT, BROWSER_ACCEPT)
            .header(header::ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
            .send()
            .await
            .map_err(|e| FacrError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FacrError::UpstreamStatus(status.as_u16()));
        }

        resp.text()
            .await
            .map_err(|e| FacrError::Fetch(e.to_string()))
    }
}
