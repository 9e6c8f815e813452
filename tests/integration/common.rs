//! Shared fixtures: mock documentation sites, a scratch directory and an
//! event sink that records what the routines report.

use doc_scraper::config::{Config, OutputConfig, SitesConfig};
use doc_scraper::fetch::FetchError;
use doc_scraper::{ScrapeContext, ScrapeEvents, Session, StatusTaxonomy};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An event reported by a routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchFailed { url: String },
    TagNotFound { tag: String, attrs: String },
    MissingStatusToken { url: String },
    StatusMismatch {
        url: String,
        declared: String,
        expected: Vec<String>,
    },
    ArchiveSaved { path: PathBuf, sha256: String },
}

/// Event sink that keeps every event in order
#[derive(Debug, Default)]
pub struct RecordingEvents {
    events: RefCell<Vec<Event>>,
}

impl RecordingEvents {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl ScrapeEvents for RecordingEvents {
    fn fetch_failed(&self, url: &str, _error: &FetchError) {
        self.push(Event::FetchFailed {
            url: url.to_string(),
        });
    }

    fn tag_not_found(&self, tag: &str, attrs: &str) {
        self.push(Event::TagNotFound {
            tag: tag.to_string(),
            attrs: attrs.to_string(),
        });
    }

    fn missing_status_token(&self, url: &str) {
        self.push(Event::MissingStatusToken {
            url: url.to_string(),
        });
    }

    fn status_mismatch(&self, url: &str, declared: &str, expected: &[String]) {
        self.push(Event::StatusMismatch {
            url: url.to_string(),
            declared: declared.to_string(),
            expected: expected.to_vec(),
        });
    }

    fn archive_saved(&self, path: &Path, sha256: &str) {
        self.push(Event::ArchiveSaved {
            path: path.to_path_buf(),
            sha256: sha256.to_string(),
        });
    }
}

/// A mock server standing in for both documentation sites
///
/// The docs root is served under `/3/` and the proposal index under `/peps/`.
pub struct TestEnv {
    pub server: MockServer,
    pub dir: TempDir,
    pub config: Config,
    pub session: Session,
    pub taxonomy: StatusTaxonomy,
    pub events: RecordingEvents,
}

impl TestEnv {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config = Config {
            sites: SitesConfig {
                main_doc_url: format!("{}/3/", server.uri()),
                pep_url: format!("{}/peps/", server.uri()),
            },
            output: OutputConfig {
                base_dir: dir.path().to_path_buf(),
                ..OutputConfig::default()
            },
            ..Config::default()
        };

        let session = Session::from_config(&config).expect("Failed to build session");
        let taxonomy = StatusTaxonomy::from_config(&config);

        Self {
            server,
            dir,
            config,
            session,
            taxonomy,
            events: RecordingEvents::default(),
        }
    }

    pub fn ctx(&self) -> ScrapeContext<'_> {
        ScrapeContext::new(&self.session, &self.config, &self.taxonomy, &self.events)
    }

    /// Absolute URL on the mock server
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// Serves `body` as HTML at `route`
    pub async fn page(&self, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(html(body))
            .mount(&self.server)
            .await;
    }

    /// Serves `body` at `route` and expects exactly `hits` requests
    pub async fn page_expecting(&self, route: &str, body: &str, hits: u64) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(html(body))
            .expect(hits)
            .mount(&self.server)
            .await;
    }

    /// Answers `route` with an HTTP error status
    pub async fn failing(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

/// Asserts every data row has the header's width
pub fn assert_uniform_arity(table: &doc_scraper::Table) {
    for row in table.rows() {
        assert_eq!(row.len(), table.header().len(), "row {:?}", row);
    }
}
