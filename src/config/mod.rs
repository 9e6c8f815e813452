//! Configuration module for the scraper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, the defaults target the public Python
//! documentation and PEP index.
//!
//! # Example
//!
//! ```no_run
//! use doc_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Proposal index: {}", config.sites.pep_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, SitesConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
