//! Release notes per Python version

use crate::fetch::Page;
use crate::html::{attr, find_all, single_line_text, text_of, Attrs};
use crate::model::Table;
use crate::scrapers::{progress_bar, ScrapeContext};
use crate::Result;
use url::Url;

/// Collects `(Link, Title, Editor/Author)` for every release listed on the
/// what's-new index
///
/// Fail-fast: if any release page cannot be fetched the whole routine
/// returns `Ok(None)`.
pub async fn whats_new(ctx: &ScrapeContext<'_>) -> Result<Option<Table>> {
    let whats_new_url = ctx.main_doc_url()?.join("whatsnew/")?;
    let Some(index) = ctx.fetch(&whats_new_url).await else {
        return Ok(None);
    };

    let links = release_links(ctx, &index)?;
    let mut table = Table::new(["Link", "Title", "Editor/Author"]);

    let progress = progress_bar(links.len(), "Parsing release notes");
    for link in links {
        let Some(page) = ctx.fetch(&link).await else {
            progress.abandon();
            return Ok(None);
        };

        let (title, editors) = release_details(ctx, &page)?;
        table.push(vec![link.to_string(), title, editors])?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(Some(table))
}

/// Absolute links of the releases in the what's-new table of contents
fn release_links(ctx: &ScrapeContext<'_>, index: &Page) -> Result<Vec<Url>> {
    let document = index.document();
    let section = ctx.find(
        document.root_element(),
        "section",
        &Attrs::id("what-s-new-in-python"),
    )?;
    let toc = ctx.find(section, "div", &Attrs::class("toctree-wrapper"))?;

    find_all(toc, "li", &Attrs::class("toctree-l1"))
        .into_iter()
        .map(|item| -> Result<Url> {
            let anchor = ctx.find(item, "a", &Attrs::any())?;
            Ok(index.url().join(attr(anchor, "href")?)?)
        })
        .collect()
}

/// First heading and the editor/author definition list of a release page
fn release_details(ctx: &ScrapeContext<'_>, page: &Page) -> Result<(String, String)> {
    let document = page.document();
    let root = document.root_element();

    let h1 = ctx.find(root, "h1", &Attrs::any())?;
    let dl = ctx.find(root, "dl", &Attrs::any())?;

    Ok((text_of(h1), single_line_text(dl)))
}
