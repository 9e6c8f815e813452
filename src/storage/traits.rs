//! Cache traits and error types

use crate::storage::CachedResponse;
use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Response cache keyed by URL
pub trait ResponseCache {
    /// Returns the stored response for `url`, if any
    fn lookup(&self, url: &str) -> CacheResult<Option<CachedResponse>>;

    /// Stores (or replaces) the response for its URL
    fn store(&self, response: &CachedResponse) -> CacheResult<()>;

    /// Removes every cached response
    fn clear(&self) -> CacheResult<()>;

    /// Number of cached responses
    fn len(&self) -> CacheResult<u64>;

    fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.len()? == 0)
    }
}
