//! HTTP session with a transparent response cache

use crate::config::{Config, UserAgentConfig};
use crate::fetch::FetchError;
use crate::storage::{CacheError, CachedResponse, ResponseCache, SqliteCache};
use crate::ScrapeError;
use reqwest::Client;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use doc_scraper::config::UserAgentConfig;
/// use doc_scraper::fetch::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Reusable HTTP session
///
/// `get` consults the response cache first and stores successful live
/// responses; `get_uncached` always goes to the network and leaves the cache
/// untouched.
pub struct Session {
    client: Client,
    cache: Box<dyn ResponseCache>,
}

impl Session {
    pub fn new(client: Client, cache: impl ResponseCache + 'static) -> Self {
        Self {
            client,
            cache: Box::new(cache),
        }
    }

    /// Builds the client and opens the on-disk cache named by the configuration
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.user_agent)?;
        let cache = SqliteCache::open(&config.output.cache_file())?;
        Ok(Self::new(client, cache))
    }

    /// GET with transparent caching
    pub async fn get(&self, url: &str) -> Result<CachedResponse, FetchError> {
        if let Some(cached) = self.cache.lookup(url)? {
            tracing::debug!("Cache hit: {}", url);
            return Ok(cached);
        }

        let response = self.fetch_live(url).await?;
        self.cache.store(&response)?;
        Ok(response)
    }

    /// GET that bypasses the cache in both directions
    pub async fn get_uncached(&self, url: &str) -> Result<CachedResponse, FetchError> {
        self.fetch_live(url).await
    }

    /// Drops every cached response
    pub fn clear_cache(&self) -> Result<(), CacheError> {
        self.cache.clear()?;
        tracing::info!("Response cache cleared");
        Ok(())
    }

    pub fn cache(&self) -> &dyn ResponseCache {
        self.cache.as_ref()
    }

    async fn fetch_live(&self, url: &str) -> Result<CachedResponse, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await?.to_vec();

        Ok(CachedResponse::new(url, status.as_u16(), content_type, body))
    }
}
