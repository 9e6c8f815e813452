//! doc-scraper: documentation-site scraper
//!
//! This crate fetches pages from the Python documentation and PEP index,
//! extracts release notes, version tables, the PDF archive and proposal
//! statuses, and hands the resulting tables to an output collaborator.

pub mod config;
pub mod events;
pub mod fetch;
pub mod html;
pub mod model;
pub mod output;
pub mod scrapers;
pub mod storage;

use thiserror::Error;

/// Main error type for scraper operations
///
/// Transport failures never show up here: the fetch gateway reports them as
/// an absent page. Everything in this enum aborts the running mode.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] storage::CacheError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Tag not found: <{tag}> {attrs}")]
    TagNotFound { tag: String, attrs: String },

    #[error("Tag <{tag}> has no `{attr}` attribute")]
    MissingAttribute { tag: String, attr: String },

    #[error("No list containing {marker:?} found")]
    SectionNotFound { marker: String },

    #[error("No status abbreviation in row: {row:?}")]
    MalformedAbbreviation { row: String },

    #[error("Row has {found} fields, header has {expected}")]
    RowArity { expected: usize, found: usize },

    #[error("Cannot derive a file name from {url}")]
    NoFileName { url: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use events::{ScrapeEvents, TracingEvents};
pub use fetch::{fetch_page, Page, Session};
pub use model::{ProposalTally, StatusTaxonomy, Table};
pub use scrapers::{run_mode, Mode, ModeOutcome, ScrapeContext};
