//! Per-URL fetch for the header analyzer.

use log::{debug, warn};

use crate::app::validate_and_normalize_url;
use crate::error_handling::describe_fetch_error;

use super::analyze::{extract_outline, format_structure, heading_issues};
use super::types::HeaderResult;

/// Fetches one page and analyzes its headings.
///
/// Never fails: transport errors, non-2xx statuses and unreadable bodies are
/// returned as a failed [`HeaderResult`] carrying the message.
pub async fn fetch_page_headers(client: &reqwest::Client, url: &str) -> HeaderResult {
    let Some(target) = validate_and_normalize_url(url) else {
        return HeaderResult::failed(url, format!("Invalid URL: {url}"));
    };

    let response = match client.get(&target).send().await {
        Ok(response) => response,
        Err(e) => return fetch_failure(url, &e),
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => return fetch_failure(url, &e),
    };
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return fetch_failure(url, &e),
    };

    let outline = extract_outline(&body);
    let issues = heading_issues(&outline.headings);
    debug!("{url}: {} headings, {} issues", outline.headings.len(), issues.len());

    HeaderResult {
        url: url.to_string(),
        title: Some(outline.title),
        meta_description: Some(outline.meta_description),
        header_structure: format_structure(&outline.headings),
        issues,
        error: None,
    }
}

fn fetch_failure(url: &str, error: &reqwest::Error) -> HeaderResult {
    let message = describe_fetch_error(error);
    warn!("Failed to fetch {url}: {message}");
    HeaderResult::failed(url, message)
}
