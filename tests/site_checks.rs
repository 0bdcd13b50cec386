//! Schema probe, presence checks and the full audit against a mock site.

use std::collections::BTreeSet;
use std::io::Write;
use std::time::{Duration, Instant};

use seo_audit::audit::{run_audit, run_site_checks, AuditInputs, CurrentValue, SchemaOutcome, Status};
use seo_audit::config::{AuditConfig, SchemaConfig};
use seo_audit::input::Table;
use seo_audit::schema::{check_schema_markup, schema_opportunities};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME_PAGE: &str = r#"<html><head>
<script type="application/ld+json">{"@context":"https://schema.org","@type":"Organization","name":"Example"}</script>
<script type="application/ld+json">{"@context":"https://schema.org","@graph":[{"@type":"WebSite"},{"@type":"BreadcrumbList"}]}</script>
<script type="application/ld+json">{ this is not json </script>
</head><body><h1>Home</h1></body></html>"#;

const ABOUT_PAGE: &str = r#"<html><body>
<div itemscope itemtype="https://schema.org/Person"><span itemprop="name">Ada</span>
<div itemprop="address" itemscope itemtype="https://schema.org/PostalAddress"></div></div>
</body></html>"#;

async fn mock_site(robots: u16, sitemap: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOME_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ABOUT_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/faq"))
        .respond_with(ResponseTemplate::new(500).set_body_string(HOME_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(robots).set_body_string("User-agent: *"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(sitemap).set_body_string("<urlset></urlset>"))
        .mount(&server)
        .await;
    server
}

fn expected_types() -> BTreeSet<String> {
    ["BreadcrumbList", "Organization", "WebSite", "https://schema.org/Person"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[tokio::test]
async fn test_schema_probe_unions_types_across_pages() {
    let server = mock_site(200, 200).await;

    let found = check_schema_markup(&server.uri(), &SchemaConfig::default())
        .await
        .expect("Probe should run");
    assert_eq!(found, expected_types());

    let config = SchemaConfig::default();
    let missing = schema_opportunities(&found, &config.checklist);
    assert!(!missing.contains(&"Organization".to_string()));
    assert!(!missing.contains(&"Breadcrumbs".to_string()));
    assert!(!missing.contains(&"Person".to_string()));
    assert!(missing.contains(&"FAQ".to_string()));
}

#[tokio::test]
async fn test_schema_probe_accepts_a_page_url() {
    let server = mock_site(200, 200).await;
    let found = check_schema_markup(&format!("{}/some/page?x=1", server.uri()), &SchemaConfig::default())
        .await
        .expect("Probe should reduce the URL to its site root");
    assert_eq!(found, expected_types());
}

#[tokio::test]
async fn test_schema_probe_gives_up_on_slow_page() {
    let server = mock_site(200, 200).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(HOME_PAGE.replace("Organization", "LocalBusiness"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let config = SchemaConfig {
        paths: vec!["".to_string(), "/slow".to_string(), "/about".to_string()],
        request_timeout: Duration::from_millis(300),
        task_grace: Duration::from_millis(200),
        ..Default::default()
    };

    let start = Instant::now();
    let found = check_schema_markup(&server.uri(), &config)
        .await
        .expect("Probe should finish despite the slow page");

    assert!(start.elapsed() < Duration::from_secs(4));
    assert!(!found.contains("LocalBusiness"));
    assert_eq!(found, expected_types());
}

#[tokio::test]
async fn test_presence_checks_require_200() {
    let server = mock_site(200, 404).await;

    let checks = run_site_checks(Some(&server.uri()), &AuditConfig::default()).await;
    assert!(checks.robots_available);
    assert!(!checks.sitemap_available);
    assert_eq!(checks.schema, SchemaOutcome::Found(expected_types()));
}

#[tokio::test]
async fn test_presence_checks_on_unreachable_site() {
    // Nothing listens on port 9 of the loopback interface
    let checks = run_site_checks(Some("http://127.0.0.1:9"), &AuditConfig::default()).await;
    assert!(!checks.robots_available);
    assert!(!checks.sitemap_available);
    assert_eq!(checks.schema, SchemaOutcome::Found(BTreeSet::new()));
}

#[tokio::test]
async fn test_full_audit_with_site_checks() {
    let server = mock_site(200, 200).await;

    let mut crawl_file = tempfile::NamedTempFile::new().expect("Temp file should be created");
    write!(
        crawl_file,
        "Address,Status Code,Canonical Link Element 1,Title 1,Title 1 Length,H1-1,Meta Description 1\n\
         https://example.com/,200,https://example.com/,Home,4,Welcome,Home page\n\
         https://example.com/a,200,https://example.com/a,Same,4,A,Desc A\n\
         https://example.com/b,200,https://example.com/b,Same,4,,Desc B\n"
    )
    .expect("Temp file should be writable");
    let crawl = Table::from_path(crawl_file.path()).expect("Crawl should load");

    let report = run_audit(
        &AuditInputs::new(&crawl),
        Some(&server.uri()),
        &AuditConfig::default(),
    )
    .await
    .expect("Audit should run");

    assert_eq!(report.domain.as_deref(), Some("example.com"));
    assert_eq!(report.row("Robots.txt file optimization").unwrap().status, Status::Pass);
    assert_eq!(
        report.row("Sitemap file optimization").unwrap().current_value,
        CurrentValue::text("Available")
    );

    let schema = report.row("Schema Markup").unwrap();
    assert_eq!(schema.status, Status::Review);
    assert_eq!(
        schema.current_value,
        CurrentValue::text(
            "Found 4 types: BreadcrumbList, Organization, WebSite, https://schema.org/Person"
        )
    );
    assert!(report.detailed_issues.schema_opportunities.is_some());
}
