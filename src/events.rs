//! Diagnostic events raised by the extraction routines
//!
//! Routines never log directly; they report through [`ScrapeEvents`] so the
//! sink can be swapped out (tests record events and assert on them). None of
//! these events affect a routine's result.

use crate::fetch::FetchError;
use std::path::Path;

/// Sink for diagnostic events, one method per event kind
pub trait ScrapeEvents {
    /// A page could not be fetched; the caller sees an absent page
    fn fetch_failed(&self, url: &str, error: &FetchError);

    /// A required tag is missing from the markup
    fn tag_not_found(&self, tag: &str, attrs: &str);

    /// A proposal page declares no `Status:` field
    fn missing_status_token(&self, url: &str);

    /// A proposal page declares a status its index abbreviation does not allow
    fn status_mismatch(&self, url: &str, declared: &str, expected: &[String]);

    /// A downloaded archive was written to disk
    fn archive_saved(&self, path: &Path, sha256: &str);
}

/// Event sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEvents;

impl ScrapeEvents for TracingEvents {
    fn fetch_failed(&self, url: &str, error: &FetchError) {
        tracing::error!("Failed to load page {}: {}", url, error);
    }

    fn tag_not_found(&self, tag: &str, attrs: &str) {
        tracing::error!("Tag not found: <{}> {}", tag, attrs);
    }

    fn missing_status_token(&self, url: &str) {
        tracing::info!("Proposal status not found: {}", url);
    }

    fn status_mismatch(&self, url: &str, declared: &str, expected: &[String]) {
        tracing::info!(
            "Mismatched statuses: {}\nStatus on page: {}\nExpected statuses: {:?}",
            url,
            declared,
            expected
        );
    }

    fn archive_saved(&self, path: &Path, sha256: &str) {
        tracing::info!("Archive downloaded and saved: {} (sha256 {})", path.display(), sha256);
    }
}
