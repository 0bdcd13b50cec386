//! The audit API over a real loopback listener.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio::net::TcpListener;

use seo_audit::config::ServerConfig;
use seo_audit::server::serve_on;

const CRAWL_CSV: &str = "\
Address,Status Code,Canonical Link Element 1,Title 1,Title 1 Length,H1-1,Meta Description 1
https://example.com/,200,https://example.com/,Home,4,Welcome,Home page
https://example.com/a,404,https://example.com/a,Same,4,A,Desc A
https://example.com/b,200,https://example.com/,Same,4,,Desc B
";

const ALT_CSV: &str = "\
Source,Destination
https://example.com/,https://example.com/1.png
https://example.com/,https://example.com/2.png
https://example.com/a,https://example.com/3.png
https://example.com/a,https://example.com/4.png
https://example.com/b,https://example.com/5.png
";

/// Starts the API on an ephemeral port and returns its base URL.
async fn start_server(config: ServerConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Loopback listener should bind");
    let addr = listener.local_addr().expect("Listener should have an address");
    tokio::spawn(async move {
        let _ = serve_on(listener, config).await;
    });
    format!("http://{addr}")
}

fn csv_part(content: &str, name: &str) -> Part {
    Part::bytes(content.as_bytes().to_vec())
        .file_name(name.to_string())
        .mime_str("text/csv")
        .expect("MIME type should parse")
}

fn find_row<'a>(body: &'a Value, parameter: &str) -> &'a Value {
    body["report"]
        .as_array()
        .expect("Report should be an array")
        .iter()
        .find(|row| row["Parameters"] == parameter)
        .unwrap_or_else(|| panic!("Row '{parameter}' should exist"))
}

#[tokio::test]
async fn test_root_and_health() {
    let base = start_server(ServerConfig::default()).await;
    let client = reqwest::Client::new();

    let root: Value = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(root["message"], "Web Audit Data Analyzer API");
    assert_eq!(root["version"], "1.0.0");

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn test_upload_builds_report() {
    let base = start_server(ServerConfig::default()).await;
    let form = Form::new()
        .part("main_file", csv_part(CRAWL_CSV, "internal_html.csv"))
        .part("alt_tag_file", csv_part(ALT_CSV, "alt.csv"));

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze/upload"))
        .multipart(form)
        .send()
        .await
        .expect("Request should succeed");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Body should be JSON");

    assert_eq!(body["domain"], "example.com");
    assert_eq!(body["report"].as_array().unwrap().len(), 28);

    let titles = find_row(&body, "Duplicate & missing meta title");
    assert_eq!(titles["Status"], "Fail");
    assert_eq!(titles["Current Value"], "Missing: 0, Duplicate: 2");

    let h1 = find_row(&body, "Duplicate & missing H1");
    assert_eq!(h1["Status"], "Fail");
    assert_eq!(h1["Current Value"], "Missing: 1, Duplicate: 0");

    let alt = find_row(&body, "Img alt tag");
    assert_eq!(alt["Current Value"], 5);
    assert_eq!(alt["Status"], "Fail");

    // Site checks are off by default for the API
    assert_eq!(find_row(&body, "Schema Markup")["Status"], "Not Available");

    let summary = body["summary"].as_object().unwrap();
    let total: u64 = summary.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 28);

    let issues = &body["detailed_issues"];
    assert_eq!(issues["duplicate_titles"].as_array().unwrap().len(), 2);
    assert_eq!(issues["images_missing_alt_text"].as_array().unwrap().len(), 5);
    assert!(issues["orphan_pages"].is_null());
}

#[tokio::test]
async fn test_upload_empty_main_file_is_bad_request() {
    let base = start_server(ServerConfig::default()).await;
    let form = Form::new().part("main_file", csv_part("", "empty.csv"));

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Main CSV file is empty");
}

#[tokio::test]
async fn test_upload_without_main_file_is_bad_request() {
    let base = start_server(ServerConfig::default()).await;
    let form = Form::new().part("orphan_file", csv_part("Address\nhttps://example.com/x\n", "o.csv"));

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("main_file"));
}

#[tokio::test]
async fn test_upload_without_address_column_is_server_error() {
    let base = start_server(ServerConfig::default()).await;
    let form = Form::new().part("main_file", csv_part("URL,Title 1\nhttps://example.com/,Home\n", "bad.csv"));

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Error processing files:"));
}

#[tokio::test]
async fn test_default_files_missing_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let base = start_server(config).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze/default"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Default files not found: Main data file:"));
}

#[tokio::test]
async fn test_default_files_are_read_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("internal_html.csv"), CRAWL_CSV).unwrap();
    std::fs::write(
        dir.path().join("orphan_urls.csv"),
        "Address\nhttps://example.com/lost\nhttps://example.com/forgotten\n",
    )
    .unwrap();
    let config = ServerConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let base = start_server(config).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze/default"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();

    let orphans = find_row(&body, "Orphan page");
    assert_eq!(orphans["Current Value"], 2);
    assert_eq!(orphans["Status"], "Fail");
    // No alt-text file in the directory
    assert_eq!(find_row(&body, "Img alt tag")["Current Value"], 0);
    assert_eq!(
        body["detailed_issues"]["orphan_pages"][0]["Address"],
        "https://example.com/lost"
    );
}
