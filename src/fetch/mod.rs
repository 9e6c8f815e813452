//! Fetch module: HTTP session, response caching and the fetch gateway
//!
//! Requests are strictly sequential; each call blocks the calling routine
//! until the response (or failure) arrives. No retries.

mod client;
mod gateway;

pub use client::{build_http_client, Session};
pub use gateway::{fetch_bytes_uncached, fetch_page, FetchError, Page};
