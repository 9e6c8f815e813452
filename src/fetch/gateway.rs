//! Fetch gateway
//!
//! The only place that turns transport problems into absence: callers get
//! `Some(Page)` or `None`, and the failure is reported through the event sink.

use crate::events::ScrapeEvents;
use crate::fetch::Session;
use crate::storage::CacheError;
use scraper::Html;
use thiserror::Error;
use url::Url;

/// Why a page could not be obtained
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with HTTP {status}")]
    Status { status: u16 },

    #[error("response cache failed: {0}")]
    Cache(#[from] CacheError),
}

/// A fetched page, decoded as UTF-8
#[derive(Debug, Clone)]
pub struct Page {
    url: Url,
    body: String,
}

impl Page {
    pub fn new(url: Url, body: String) -> Self {
        Self { url, body }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Parses the body into a document tree
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Fetches a page through the session cache
///
/// Declared encodings on the scraped sites are unreliable, so the body is
/// always decoded as UTF-8 (invalid sequences are replaced).
///
/// # Returns
///
/// * `Some(Page)` - The page body
/// * `None` - The fetch failed; a `fetch_failed` event was emitted
pub async fn fetch_page(session: &Session, url: &Url, events: &dyn ScrapeEvents) -> Option<Page> {
    match session.get(url.as_str()).await {
        Ok(response) => {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            Some(Page::new(url.clone(), body))
        }
        Err(error) => {
            events.fetch_failed(url.as_str(), &error);
            None
        }
    }
}

/// Fetches raw bytes without touching the cache
///
/// Failures are reported like [`fetch_page`] failures.
pub async fn fetch_bytes_uncached(
    session: &Session,
    url: &Url,
    events: &dyn ScrapeEvents,
) -> Option<Vec<u8>> {
    match session.get_uncached(url.as_str()).await {
        Ok(response) => Some(response.body),
        Err(error) => {
            events.fetch_failed(url.as_str(), &error);
            None
        }
    }
}
