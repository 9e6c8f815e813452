use crate::common::{assert_uniform_arity, Event, TestEnv};
use doc_scraper::scrapers::{audit_proposals, pep, UNKNOWN_STATUS};
use doc_scraper::ScrapeError;

/// Numerical index with one `(abbreviation, number)` row per proposal
///
/// Titles are lowercase so the only type letters in a row are the
/// abbreviation's.
fn index_page(rows: &[(&str, u32)]) -> String {
    let body: String = rows
        .iter()
        .map(|(abbreviation, number)| {
            format!(
                "<tr class=\"row-odd\"><td><abbr title=\"status\">{abbr}</abbr></td>\
                 <td><a class=\"pep reference internal\" href=\"pep-{num:04}/\">{num}</a></td>\
                 <td>title {num}</td></tr>\n",
                abbr = abbreviation,
                num = number
            )
        })
        .collect();

    format!(
        "<html><body><section id=\"numerical-index\"><table class=\"pep-zero-table docutils\">\
         <thead><tr><th>Type</th><th>PEP</th><th>Title</th></tr></thead>\
         <tbody>\n{}</tbody></table></section></body></html>",
        body
    )
}

fn detail_page(status: &str) -> String {
    format!(
        "<html><body><dl class=\"rfc2822 field-list simple\">\n\
         <dt class=\"field-odd\">Author<span class=\"colon\">:</span></dt>\n\
         <dd class=\"field-odd\">Someone</dd>\n\
         <dt class=\"field-even\">Status:</dt>\n\
         <dd class=\"field-even\"><abbr>{}</abbr></dd>\n\
         </dl></body></html>",
        status
    )
}

const DETAIL_WITHOUT_STATUS: &str = "<html><body><dl class=\"rfc2822 field-list simple\">\n\
     <dt>Author:</dt>\n<dd>Someone</dd>\n</dl></body></html>";

#[tokio::test]
async fn test_tally_with_total() {
    let env = TestEnv::start().await;
    env.page("/peps/", &index_page(&[("PA", 1), ("PA", 8), ("SF", 20)]))
        .await;
    env.page("/peps/pep-0001/", &detail_page("Active")).await;
    env.page("/peps/pep-0008/", &detail_page("Active")).await;
    env.page("/peps/pep-0020/", &detail_page("Final")).await;

    let table = pep(&env.ctx()).await.unwrap().unwrap();

    assert_eq!(table.header(), ["Status", "Count"]);
    assert_eq!(table.rows()[0], ["Active", "2"]);
    assert_eq!(table.rows()[1], ["Final", "1"]);
    assert_eq!(table.rows()[2], ["Total", "3"]);
    assert_uniform_arity(&table);
    assert!(env.events.events().is_empty());
}

#[tokio::test]
async fn test_missing_status_token_counts_as_unknown() {
    let env = TestEnv::start().await;
    env.page("/peps/", &index_page(&[("SF", 8), ("SF", 20)]))
        .await;
    env.page("/peps/pep-0008/", &detail_page("Final")).await;
    env.page("/peps/pep-0020/", DETAIL_WITHOUT_STATUS).await;

    let tally = audit_proposals(&env.ctx()).await.unwrap().unwrap();

    assert_eq!(tally.count(UNKNOWN_STATUS), 1);
    assert_eq!(tally.total(), 2);

    let events = env.events.events();
    assert!(events.contains(&Event::MissingStatusToken {
        url: env.url("/peps/pep-0020/")
    }));
    // "Unknown status" is not an expected status for "SF" either
    assert!(events.contains(&Event::StatusMismatch {
        url: env.url("/peps/pep-0020/"),
        declared: UNKNOWN_STATUS.to_string(),
        expected: vec!["Final".to_string()],
    }));
}

#[tokio::test]
async fn test_mismatch_reported_with_expected_set() {
    let env = TestEnv::start().await;
    env.page("/peps/", &index_page(&[("SA", 387)])).await;
    env.page("/peps/pep-0387/", &detail_page("Final")).await;

    let tally = audit_proposals(&env.ctx()).await.unwrap().unwrap();

    // Mismatch never drops the row
    assert_eq!(tally.count("Final"), 1);
    assert_eq!(
        env.events.events(),
        vec![Event::StatusMismatch {
            url: env.url("/peps/pep-0387/"),
            declared: "Final".to_string(),
            expected: vec!["Active".to_string(), "Accepted".to_string()],
        }]
    );
}

#[tokio::test]
async fn test_single_letter_uses_default_expectation() {
    let env = TestEnv::start().await;
    env.page("/peps/", &index_page(&[("I", 9), ("I", 10)])).await;
    env.page("/peps/pep-0009/", &detail_page("Draft")).await;
    env.page("/peps/pep-0010/", &detail_page("Rejected")).await;

    let tally = audit_proposals(&env.ctx()).await.unwrap().unwrap();

    assert_eq!(tally.total(), 2);
    assert_eq!(
        env.events.events(),
        vec![Event::StatusMismatch {
            url: env.url("/peps/pep-0010/"),
            declared: "Rejected".to_string(),
            expected: vec!["Draft".to_string(), "Active".to_string()],
        }]
    );
}

#[tokio::test]
async fn test_repeated_audit_is_idempotent() {
    let env = TestEnv::start().await;
    env.page_expecting("/peps/", &index_page(&[("PA", 1), ("SF", 8)]), 1)
        .await;
    env.page_expecting("/peps/pep-0001/", &detail_page("Active"), 1)
        .await;
    env.page_expecting("/peps/pep-0008/", &detail_page("Final"), 1)
        .await;

    let first = pep(&env.ctx()).await.unwrap().unwrap();
    let second = pep(&env.ctx()).await.unwrap().unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_malformed_abbreviation_is_fatal() {
    let env = TestEnv::start().await;
    env.page("/peps/", &index_page(&[("SF", 8), ("XX", 9)])).await;
    env.page("/peps/pep-0008/", &detail_page("Final")).await;

    let result = pep(&env.ctx()).await;

    assert!(matches!(
        result,
        Err(ScrapeError::MalformedAbbreviation { .. })
    ));
}

#[tokio::test]
async fn test_detail_fetch_failure_aborts() {
    let env = TestEnv::start().await;
    env.page("/peps/", &index_page(&[("SF", 8), ("SF", 20), ("SF", 257)]))
        .await;
    env.page("/peps/pep-0008/", &detail_page("Final")).await;
    env.failing("/peps/pep-0020/", 500).await;
    env.page_expecting("/peps/pep-0257/", &detail_page("Final"), 0)
        .await;

    let result = pep(&env.ctx()).await.unwrap();

    assert!(result.is_none());
    assert!(env.events.events().contains(&Event::FetchFailed {
        url: env.url("/peps/pep-0020/")
    }));
}

#[tokio::test]
async fn test_missing_numerical_index_is_fatal() {
    let env = TestEnv::start().await;
    env.page("/peps/", "<html><body><section id=\"intro\"></section></body></html>")
        .await;

    let result = pep(&env.ctx()).await;

    assert!(matches!(result, Err(ScrapeError::TagNotFound { ref tag, .. }) if tag == "section"));
}
