//! Header-structure scan against a mock site.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seo_audit::config::HeaderScanConfig;
use seo_audit::pool::ProgressCallback;
use seo_audit::run_header_scan;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(format!(
            "<html><head><title>Test Page</title><meta name=\"description\" content=\"About things\"></head><body>{body}</body></html>"
        ))
}

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/good"))
        .respond_with(html("<h1>Welcome</h1><h2>About</h2><h3>Team</h3>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jump"))
        .respond_with(html("<h1>Welcome</h1><h3>Skipped</h3>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/no-h1"))
        .respond_with(html("<h2>Only a subheading</h2>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/two-h1"))
        .respond_with(html("<h1>One</h1><h1>Two</h1>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_scan_counts_issues_and_fetch_errors() {
    let server = mock_site().await;
    let urls: Vec<String> = ["/good", "/jump", "/no-h1", "/two-h1", "/gone"]
        .iter()
        .map(|p| format!("{}{p}", server.uri()))
        .collect();
    let config = HeaderScanConfig {
        workers: 2,
        ..Default::default()
    };

    let report = run_header_scan(urls, &config, None)
        .await
        .expect("Scan should run");

    assert_eq!(report.results.len(), 5);
    let summary = &report.summary;
    assert_eq!(summary.total_pages, 5);
    assert_eq!(summary.pages_without_issues, 1);
    assert_eq!(summary.pages_with_issues, 4);
    assert_eq!(summary.missing_h1, 1);
    assert_eq!(summary.duplicate_h1, 1);
    assert_eq!(summary.hierarchy_jumps, 1);
    assert_eq!(summary.fetch_errors, 1);

    let good = report
        .results
        .iter()
        .find(|r| r.url.ends_with("/good"))
        .expect("Good page should have a result");
    assert_eq!(good.title.as_deref(), Some("Test Page"));
    assert_eq!(good.meta_description.as_deref(), Some("About things"));
    assert_eq!(good.header_structure, "H1: Welcome\nH2: About\nH3: Team");
    assert!(good.issues.is_empty());

    let jump = report
        .results
        .iter()
        .find(|r| r.url.ends_with("/jump"))
        .expect("Jump page should have a result");
    assert_eq!(
        jump.issues,
        vec!["Hierarchy jump from H1 to H3 at position 2: 'Skipped'".to_string()]
    );

    let gone = report
        .results
        .iter()
        .find(|r| r.url.ends_with("/gone"))
        .expect("Missing page should have a result");
    assert!(gone.is_error());
    assert!(gone.error.as_deref().unwrap_or_default().starts_with("404 Client Error"));
    assert!(gone.title.is_none());
    assert!(gone.header_structure.is_empty());
}

#[tokio::test]
async fn test_scan_reports_progress_and_honors_limit() {
    let server = mock_site().await;
    let urls: Vec<String> = ["/good", "/jump", "/no-h1", "/two-h1"]
        .iter()
        .map(|p| format!("{}{p}", server.uri()))
        .collect();
    let config = HeaderScanConfig {
        limit: 3,
        ..Default::default()
    };

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let progress: ProgressCallback = Some(Arc::new(move |completed, total| {
        assert_eq!(total, 3);
        assert!(completed <= total);
        seen.fetch_add(1, Ordering::SeqCst);
    }));

    let report = run_header_scan(urls, &config, progress)
        .await
        .expect("Scan should run");
    assert_eq!(report.results.len(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_scan_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "SEOHeaderAnalyzer/1.0"))
        .respond_with(html("<h1>Hi</h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let report = run_header_scan(
        vec![format!("{}/ua", server.uri())],
        &HeaderScanConfig::default(),
        None,
    )
    .await
    .expect("Scan should run");
    assert!(!report.results[0].is_error());
}

#[tokio::test]
async fn test_invalid_url_becomes_error_record() {
    let report = run_header_scan(
        vec!["http://".to_string()],
        &HeaderScanConfig::default(),
        None,
    )
    .await
    .expect("Scan should run");
    assert_eq!(
        report.results[0].error.as_deref(),
        Some("Invalid URL: http://")
    );
    assert_eq!(report.summary.fetch_errors, 1);
}

#[tokio::test]
async fn test_overlong_non_ascii_url_is_recorded_as_error() {
    log::set_max_level(log::LevelFilter::Warn);
    let server = mock_site().await;
    let long_url = format!("https://example.com/a{}", "é".repeat(1100));
    let urls = vec![long_url.clone(), format!("{}/good", server.uri())];

    let report = run_header_scan(urls, &HeaderScanConfig::default(), None)
        .await
        .expect("Scan should run");

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.summary.total_pages, 2);
    assert_eq!(report.summary.fetch_errors, 1);
    let failed = report
        .results
        .iter()
        .find(|r| r.url == long_url)
        .expect("Overlong URL should have a result");
    assert!(failed.is_error());
    assert!(failed.error.as_deref().unwrap_or_default().starts_with("Invalid URL"));
}
