use crate::model::taxonomy::builtin_entries;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure for the scraper
///
/// Every section is optional; a missing section falls back to the defaults
/// that target the public Python documentation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sites: SitesConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    /// Status code -> accepted statuses. Replaces the built-in table as a whole.
    #[serde(rename = "expected-status")]
    pub expected_status: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites: SitesConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
            expected_status: builtin_entries(),
        }
    }
}

/// Documentation sites to scrape
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitesConfig {
    /// Root of the versioned documentation (what's new, downloads, sidebar)
    #[serde(rename = "main-doc-url")]
    pub main_doc_url: String,

    /// Root of the proposal index
    #[serde(rename = "pep-url")]
    pub pep_url: String,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            main_doc_url: "https://docs.python.org/3/".to_string(),
            pep_url: "https://peps.python.org/".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub name: String,
    pub version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "doc-scraper".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `name/version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

/// Output locations
///
/// Relative paths are resolved against `base-dir`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(rename = "base-dir")]
    pub base_dir: PathBuf,

    /// SQLite file holding the HTTP response cache
    #[serde(rename = "cache-path")]
    pub cache_path: PathBuf,

    #[serde(rename = "downloads-dir")]
    pub downloads_dir: PathBuf,

    #[serde(rename = "results-dir")]
    pub results_dir: PathBuf,

    #[serde(rename = "logs-dir")]
    pub logs_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            cache_path: PathBuf::from("http_cache.sqlite"),
            downloads_dir: PathBuf::from("downloads"),
            results_dir: PathBuf::from("results"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl OutputConfig {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn cache_file(&self) -> PathBuf {
        self.resolve(&self.cache_path)
    }

    pub fn downloads_path(&self) -> PathBuf {
        self.resolve(&self.downloads_dir)
    }

    pub fn results_path(&self) -> PathBuf {
        self.resolve(&self.results_dir)
    }

    pub fn logs_path(&self) -> PathBuf {
        self.resolve(&self.logs_dir)
    }
}
