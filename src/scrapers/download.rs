//! A4 PDF documentation archive download

use crate::fetch::{fetch_bytes_uncached, Page};
use crate::html::{attr, Attrs};
use crate::scrapers::ScrapeContext;
use crate::{Result, ScrapeError};
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

static PDF_A4_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+pdf-a4\.zip$").expect("Failed to compile archive regex"));

/// Downloads the A4 PDF archive linked from the downloads page
///
/// The archive itself is fetched without the response cache and written to
/// the downloads directory under the last segment of its URL.
///
/// # Returns
///
/// * `Ok(Some(path))` - Archive saved at `path`
/// * `Ok(None)` - The downloads page or the archive could not be fetched
pub async fn download(ctx: &ScrapeContext<'_>) -> Result<Option<PathBuf>> {
    let downloads_url = ctx.main_doc_url()?.join("download.html")?;
    let downloads_dir = ctx.config.output.downloads_path();
    std::fs::create_dir_all(&downloads_dir)?;

    let Some(page) = ctx.fetch(&downloads_url).await else {
        return Ok(None);
    };

    let archive_url = archive_link(ctx, &page)?;
    let filename = archive_file_name(&archive_url)?;

    let Some(content) = fetch_bytes_uncached(ctx.session, &archive_url, ctx.events).await else {
        return Ok(None);
    };

    let archive_path = downloads_dir.join(filename);
    let mut file = File::create(&archive_path)?;
    file.write_all(&content)?;

    let digest = hex::encode(Sha256::digest(&content));
    ctx.events.archive_saved(&archive_path, &digest);

    Ok(Some(archive_path))
}

/// Absolute URL of the A4 archive in the documentation table
fn archive_link(ctx: &ScrapeContext<'_>, page: &Page) -> Result<Url> {
    let document = page.document();
    let main = ctx.find(document.root_element(), "div", &Attrs::any().with("role", "main"))?;
    let table = ctx.find(main, "table", &Attrs::class("docutils"))?;
    let anchor = ctx.find(
        table,
        "a",
        &Attrs::any().matching("href", PDF_A4_PATTERN.clone()),
    )?;

    Ok(page.url().join(attr(anchor, "href")?)?)
}

/// Last path segment of `url`
pub fn archive_file_name(url: &Url) -> Result<String> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ScrapeError::NoFileName {
            url: url.to_string(),
        })
}
