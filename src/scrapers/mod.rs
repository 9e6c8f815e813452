//! Extraction routines and the mode dispatcher
//!
//! Each routine fetches one index page, walks it with the tag locator and
//! either builds a [`Table`] or writes a file. Routines share one contract:
//!
//! | Condition | Result |
//! |-----------|--------|
//! | Index or item fetch fails | `Ok(None)`, partial rows discarded |
//! | Required tag or attribute missing | `Err`, routine aborts |
//! | Data anomaly inside the proposal audit | event emitted, loop continues |

mod download;
mod latest_versions;
mod pep;
mod whats_new;

pub use download::{archive_file_name, download};
pub use latest_versions::{latest_versions, split_version_text, ALL_VERSIONS_MARKER};
pub use pep::{
    audit_proposals, declared_status, parse_abbreviation, pep, Abbreviation, UNKNOWN_STATUS,
};
pub use whats_new::whats_new;

use crate::config::Config;
use crate::events::ScrapeEvents;
use crate::fetch::{fetch_page, Page, Session};
use crate::html::{find_tag, Attrs};
use crate::model::{StatusTaxonomy, Table};
use crate::{Result, ScrapeError};
use indicatif::{ProgressBar, ProgressStyle};
use scraper::ElementRef;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Scraping mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Mode {
    /// Release notes for every Python version
    WhatsNew,
    /// Documentation versions and their status
    LatestVersions,
    /// Download the A4 PDF documentation archive
    Download,
    /// Tally proposal statuses and check them against the index
    Pep,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::WhatsNew, Mode::LatestVersions, Mode::Download, Mode::Pep];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a mode produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeOutcome {
    /// A result table for the output collaborator
    Table(Table),
    /// A file written to disk
    Saved(PathBuf),
    /// A fetch failed; nothing was produced
    Aborted,
}

/// Everything a routine needs for one run
pub struct ScrapeContext<'a> {
    pub session: &'a Session,
    pub config: &'a Config,
    pub taxonomy: &'a StatusTaxonomy,
    pub events: &'a dyn ScrapeEvents,
}

impl<'a> ScrapeContext<'a> {
    pub fn new(
        session: &'a Session,
        config: &'a Config,
        taxonomy: &'a StatusTaxonomy,
        events: &'a dyn ScrapeEvents,
    ) -> Self {
        Self {
            session,
            config,
            taxonomy,
            events,
        }
    }

    /// Fetches a page through the gateway
    pub async fn fetch(&self, url: &Url) -> Option<Page> {
        fetch_page(self.session, url, self.events).await
    }

    /// Tag locator that also reports misses to the event sink
    pub fn find<'d>(&self, root: ElementRef<'d>, tag: &str, attrs: &Attrs) -> Result<ElementRef<'d>> {
        find_tag(root, tag, attrs).map_err(|error| {
            if let ScrapeError::TagNotFound { tag, attrs } = &error {
                self.events.tag_not_found(tag, attrs);
            }
            error
        })
    }

    pub fn main_doc_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.config.sites.main_doc_url)?)
    }

    pub fn pep_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.config.sites.pep_url)?)
    }
}

/// Runs the routine behind `mode`
pub async fn run_mode(mode: Mode, ctx: &ScrapeContext<'_>) -> Result<ModeOutcome> {
    tracing::debug!("Running mode {}", mode);

    let outcome = match mode {
        Mode::WhatsNew => whats_new(ctx).await?.map(ModeOutcome::Table),
        Mode::LatestVersions => latest_versions(ctx).await?.map(ModeOutcome::Table),
        Mode::Download => download(ctx).await?.map(ModeOutcome::Saved),
        Mode::Pep => pep(ctx).await?.map(ModeOutcome::Table),
    };

    Ok(outcome.unwrap_or(ModeOutcome::Aborted))
}

/// Progress bar for per-item loops
fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let style = ProgressStyle::with_template("{msg}: {wide_bar} {pos}/{len} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(len as u64)
        .with_style(style)
        .with_message(message)
}
