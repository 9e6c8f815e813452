use crate::common::TestEnv;
use doc_scraper::output::{control_output, OutputMode};
use doc_scraper::{run_mode, Mode, ModeOutcome, ScrapeError};

const VERSIONS_INDEX: &str = r#"<html><body><div class="sphinxsidebarwrapper">
<ul>
  <li><a href="https://docs.python.org/3.12/">Python 3.12 (stable)</a></li>
  <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
</ul>
</div></body></html>"#;

#[tokio::test]
async fn test_table_mode_yields_table() {
    let env = TestEnv::start().await;
    env.page("/3/", VERSIONS_INDEX).await;

    let outcome = run_mode(Mode::LatestVersions, &env.ctx()).await.unwrap();

    match outcome {
        ModeOutcome::Table(table) => assert_eq!(table.len(), 2),
        other => panic!("expected a table, got {:?}", other),
    }
}

#[tokio::test]
async fn test_download_mode_yields_saved_path() {
    let env = TestEnv::start().await;
    env.page(
        "/3/download.html",
        r#"<div role="main"><table class="docutils">
            <tr><td><a href="archives/docs-pdf-a4.zip">A4</a></td></tr>
        </table></div>"#,
    )
    .await;
    wiremock::Mock::given(wiremock::matchers::path("/3/archives/docs-pdf-a4.zip"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_bytes(b"zip".to_vec()))
        .mount(&env.server)
        .await;

    let outcome = run_mode(Mode::Download, &env.ctx()).await.unwrap();

    assert_eq!(
        outcome,
        ModeOutcome::Saved(env.dir.path().join("downloads").join("docs-pdf-a4.zip"))
    );
}

#[tokio::test]
async fn test_fetch_failure_yields_aborted() {
    let env = TestEnv::start().await;

    // Nothing mounted: every page answers 404
    for mode in [Mode::WhatsNew, Mode::LatestVersions, Mode::Pep] {
        let outcome = run_mode(mode, &env.ctx()).await.unwrap();
        assert_eq!(outcome, ModeOutcome::Aborted, "mode {}", mode);
    }
}

#[tokio::test]
async fn test_structural_failure_propagates() {
    let env = TestEnv::start().await;
    env.page("/3/", "<html><body></body></html>").await;

    let result = run_mode(Mode::LatestVersions, &env.ctx()).await;

    assert!(matches!(result, Err(ScrapeError::TagNotFound { .. })));
}

#[tokio::test]
async fn test_table_written_as_csv() {
    let env = TestEnv::start().await;
    env.page("/3/", VERSIONS_INDEX).await;

    let ModeOutcome::Table(table) = run_mode(Mode::LatestVersions, &env.ctx()).await.unwrap()
    else {
        panic!("expected a table");
    };
    let path = control_output(
        &table,
        Mode::LatestVersions,
        Some(OutputMode::File),
        &env.config.output,
    )
    .unwrap()
    .unwrap();

    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("latest-versions_"));
    assert!(file_name.ends_with(".csv"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "\"Link\",\"Version\",\"Status\"\n\
         \"https://docs.python.org/3.12/\",\"3.12\",\"stable\"\n\
         \"https://www.python.org/doc/versions/\",\"All versions\",\"\"\n"
    );
}
