use crate::config::types::{Config, OutputConfig, SitesConfig, UserAgentConfig};
use crate::ConfigError;
use std::collections::BTreeMap;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_sites_config(&config.sites)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_expected_status(&config.expected_status)?;
    Ok(())
}

/// Validates site roots: absolute http(s) URLs ending in `/`
fn validate_sites_config(config: &SitesConfig) -> Result<(), ConfigError> {
    validate_site_root("main-doc-url", &config.main_doc_url)?;
    validate_site_root("pep-url", &config.pep_url)?;
    Ok(())
}

fn validate_site_root(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use http or https",
            key, value
        )));
    }

    // Relative joins drop the last segment unless the root ends in a slash
    if !url.path().ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must end with '/'",
            key, value
        )));
    }

    Ok(())
}

fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if config.name.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "user-agent name must not contain whitespace, got '{}'",
            config.name
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (key, path) in [
        ("cache-path", &config.cache_path),
        ("downloads-dir", &config.downloads_dir),
        ("results-dir", &config.results_dir),
        ("logs-dir", &config.logs_dir),
    ] {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
        }
    }

    Ok(())
}

/// Validates the status taxonomy table
///
/// Keys are single status letters, plus the empty key used for rows whose
/// abbreviation carries no status letter.
fn validate_expected_status(entries: &BTreeMap<String, Vec<String>>) -> Result<(), ConfigError> {
    if !entries.contains_key("") {
        return Err(ConfigError::Validation(
            "expected-status must define the default entry \"\"".to_string(),
        ));
    }

    for (code, statuses) in entries {
        if code.chars().count() > 1 {
            return Err(ConfigError::Validation(format!(
                "expected-status key '{}' must be a single character",
                code
            )));
        }

        if statuses.is_empty() {
            return Err(ConfigError::Validation(format!(
                "expected-status '{}' must list at least one status",
                code
            )));
        }
    }

    Ok(())
}
