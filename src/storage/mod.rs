//! Storage module for the on-disk HTTP response cache
//!
//! Successful GET responses are persisted in SQLite keyed by URL, so repeated
//! runs read pages from disk instead of the network until the cache is
//! cleared.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteCache;
pub use traits::{CacheError, CacheResult, ResponseCache};

use chrono::Utc;

/// A cached HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub url: String,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// RFC 3339 timestamp of the live fetch
    pub fetched_at: String,
}

impl CachedResponse {
    /// Creates a response record stamped with the current time
    pub fn new(url: &str, status_code: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.to_string(),
            status_code,
            content_type,
            body,
            fetched_at: Utc::now().to_rfc3339(),
        }
    }
}
