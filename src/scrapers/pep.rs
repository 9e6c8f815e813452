//! Proposal status audit
//!
//! Walks the numerical index of the PEP site, reads the declared status from
//! every proposal page and tallies it. The abbreviation in the index (e.g.
//! `SF`: Standards track, Final) tells which statuses a page may declare;
//! disagreements are reported but never drop a row.

use crate::fetch::Page;
use crate::html::{attr, find_all, text_of, text_tokens, Attrs};
use crate::model::{ProposalTally, Table};
use crate::scrapers::{progress_bar, ScrapeContext};
use crate::{Result, ScrapeError};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Token that precedes the declared status on a proposal page
pub const STATUS_TOKEN: &str = "Status:";

/// Status recorded for pages that declare none
pub const UNKNOWN_STATUS: &str = "Unknown status";

static ABBREVIATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[IPS][ADFPRSW]?").expect("Failed to compile abbreviation regex"));

/// Type and optional status letter of an index row, e.g. `SF` or `I`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abbreviation {
    pub category: char,
    pub status: Option<char>,
}

/// Finds the first abbreviation in an index row's text
///
/// # Returns
///
/// * `Ok(Abbreviation)` - The first `[IPS][ADFPRSW]?` match
/// * `Err(ScrapeError::MalformedAbbreviation)` - The row has none
pub fn parse_abbreviation(row_text: &str) -> Result<Abbreviation> {
    let found = ABBREVIATION_PATTERN
        .find(row_text)
        .ok_or_else(|| ScrapeError::MalformedAbbreviation {
            row: row_text.trim().to_string(),
        })?;

    let mut letters = found.as_str().chars();
    match letters.next() {
        Some(category) => Ok(Abbreviation {
            category,
            status: letters.next(),
        }),
        None => Err(ScrapeError::MalformedAbbreviation {
            row: row_text.trim().to_string(),
        }),
    }
}

/// Token following `Status:`, if there is one
pub fn declared_status(tokens: &[String]) -> Option<&str> {
    let position = tokens.iter().position(|token| token == STATUS_TOKEN)?;
    tokens.get(position + 1).map(String::as_str)
}

/// One row of the numerical index
struct IndexRow {
    abbreviation: Abbreviation,
    link: Url,
}

/// Audits every proposal and returns the `(Status, Count)` table with a
/// trailing `(Total, sum)` row
pub async fn pep(ctx: &ScrapeContext<'_>) -> Result<Option<Table>> {
    Ok(audit_proposals(ctx).await?.map(|tally| tally.to_table()))
}

/// Audits every proposal and returns the raw tally
///
/// Any failed page fetch aborts the audit with `Ok(None)`.
pub async fn audit_proposals(ctx: &ScrapeContext<'_>) -> Result<Option<ProposalTally>> {
    let pep_url = ctx.pep_url()?;
    let Some(index) = ctx.fetch(&pep_url).await else {
        return Ok(None);
    };

    let rows = index_rows(ctx, &index)?;
    let mut tally = ProposalTally::new();

    let progress = progress_bar(rows.len(), "Auditing proposals");
    for row in rows {
        let expected = ctx.taxonomy.expected(row.abbreviation.status);

        let Some(detail) = ctx.fetch(&row.link).await else {
            progress.abandon();
            return Ok(None);
        };

        let status = page_status(ctx, &detail)?;
        tally.record(&status);

        if !expected.iter().any(|accepted| *accepted == status) {
            ctx.events
                .status_mismatch(row.link.as_str(), &status, expected);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(Some(tally))
}

fn index_rows(ctx: &ScrapeContext<'_>, index: &Page) -> Result<Vec<IndexRow>> {
    let document = index.document();
    let section = ctx.find(
        document.root_element(),
        "section",
        &Attrs::id("numerical-index"),
    )?;
    let tbody = ctx.find(section, "tbody", &Attrs::any())?;

    find_all(tbody, "tr", &Attrs::any())
        .into_iter()
        .map(|tr| -> Result<IndexRow> {
            let abbreviation = parse_abbreviation(&text_of(tr))?;
            let anchor = ctx.find(tr, "a", &Attrs::any())?;
            let link = index.url().join(attr(anchor, "href")?)?;
            Ok(IndexRow { abbreviation, link })
        })
        .collect()
}

/// Declared status of a proposal page, or the placeholder when missing
fn page_status(ctx: &ScrapeContext<'_>, page: &Page) -> Result<String> {
    let document = page.document();
    let fields = ctx.find(
        document.root_element(),
        "dl",
        &Attrs::class("rfc2822 field-list simple"),
    )?;

    let tokens = text_tokens(fields);
    match declared_status(&tokens) {
        Some(status) => Ok(status.to_string()),
        None => {
            ctx.events.missing_status_token(page.url().as_str());
            Ok(UNKNOWN_STATUS.to_string())
        }
    }
}
