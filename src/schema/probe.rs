//! Site-wide schema probe.
//!
//! Fetches the site root joined with each configured path through the bounded
//! pool and unions the type names found. A page that fails, times out, or
//! returns a non-2xx status contributes nothing.

use std::collections::BTreeSet;
use std::time::Instant;

use log::{debug, info};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};

use crate::app::normalize_base_url;
use crate::config::SchemaConfig;
use crate::error_handling::SchemaError;
use crate::initialization::init_client;
use crate::pool::run_bounded;

use super::extract::{extract_schemas, ExtractedSchemas};

const SCHEMA_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const SCHEMA_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Fetches one page and extracts its structured data.
pub async fn fetch_page_schemas(
    client: &reqwest::Client,
    url: &str,
) -> Result<ExtractedSchemas, reqwest::Error> {
    let body = client
        .get(url)
        .header(ACCEPT, SCHEMA_ACCEPT)
        .header(ACCEPT_LANGUAGE, SCHEMA_ACCEPT_LANGUAGE)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(extract_schemas(&body))
}

/// Probe URLs for a site root, in configured order.
pub fn probe_urls(base_url: &str, paths: &[String]) -> Vec<String> {
    paths.iter().map(|path| format!("{base_url}{path}")).collect()
}

/// Distinct schema type names found across the site's probe pages.
///
/// `domain` may be a bare host or a URL; it is reduced to its site root. Each
/// page gets `request_timeout` per request and `request_timeout + task_grace`
/// overall.
pub async fn check_schema_markup(
    domain: &str,
    config: &SchemaConfig,
) -> Result<BTreeSet<String>, SchemaError> {
    let base_url =
        normalize_base_url(domain).ok_or_else(|| SchemaError::InvalidBaseUrl(domain.to_string()))?;
    let client = init_client(&config.user_agent, config.request_timeout, config.accept_invalid_certs)?;
    let deadline = config.request_timeout + config.task_grace;
    let urls = probe_urls(&base_url, &config.paths);
    let start_time = Instant::now();
    info!("Checking schema markup on {} pages of {base_url}", urls.len());

    let mut found = BTreeSet::new();
    let mut pages_with_markup = 0usize;
    run_bounded(
        urls,
        config.workers,
        move |url: String| {
            let client = client.clone();
            async move {
                match tokio::time::timeout(deadline, fetch_page_schemas(&client, &url)).await {
                    Ok(Ok(schemas)) => Some(schemas.type_names()),
                    Ok(Err(e)) => {
                        debug!("Schema probe skipped {url}: {e}");
                        None
                    }
                    Err(_) => {
                        debug!("Schema probe timed out for {url}");
                        None
                    }
                }
            }
        },
        |_| None,
        &None,
        |names: Option<BTreeSet<String>>| {
            if let Some(names) = names {
                if !names.is_empty() {
                    pages_with_markup += 1;
                }
                found.extend(names);
            }
        },
    )
    .await;

    info!(
        "Schema probe found {} types on {pages_with_markup} pages in {:.2}s",
        found.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(found)
}
