//! Documentation versions and their status, from the sidebar version list

use crate::html::{attr, find_all, text_of, Attrs};
use crate::model::Table;
use crate::scrapers::ScrapeContext;
use crate::{Result, ScrapeError};
use regex::Regex;
use std::sync::LazyLock;

/// Text identifying the sidebar list that holds the version links
pub const ALL_VERSIONS_MARKER: &str = "All versions";

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)")
        .expect("Failed to compile version regex")
});

/// Builds `(Link, Version, Status)` rows from the sidebar version list
///
/// The first `<ul>` in the sidebar whose text mentions "All versions" is
/// used. No such list means the page layout changed: that is an error, not
/// an empty table.
pub async fn latest_versions(ctx: &ScrapeContext<'_>) -> Result<Option<Table>> {
    let url = ctx.main_doc_url()?;
    let Some(page) = ctx.fetch(&url).await else {
        return Ok(None);
    };

    let document = page.document();
    let sidebar = ctx.find(
        document.root_element(),
        "div",
        &Attrs::class("sphinxsidebarwrapper"),
    )?;

    let version_list = find_all(sidebar, "ul", &Attrs::any())
        .into_iter()
        .find(|ul| text_of(*ul).contains(ALL_VERSIONS_MARKER));
    let Some(version_list) = version_list else {
        return Err(ScrapeError::SectionNotFound {
            marker: ALL_VERSIONS_MARKER.to_string(),
        });
    };

    let mut table = Table::new(["Link", "Version", "Status"]);
    for anchor in find_all(version_list, "a", &Attrs::any()) {
        let link = attr(anchor, "href")?.to_string();
        let (version, status) = split_version_text(&text_of(anchor));
        table.push(vec![link, version, status])?;
    }

    Ok(Some(table))
}

/// Splits `Python X.Y (status)` into version and status
///
/// Text that does not follow the pattern (e.g. "In development") is kept
/// whole as the version, with an empty status.
pub fn split_version_text(text: &str) -> (String, String) {
    match VERSION_PATTERN.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}
