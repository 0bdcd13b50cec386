//! Sitemap discovery.
//!
//! Tries each conventional sitemap path against the site root and follows
//! sitemap indexes to their children. Every sitemap URL is fetched at most
//! once per run.

use std::collections::{BTreeSet, HashSet};

use log::{debug, info, warn};
use reqwest::StatusCode;
use url::Url;

use crate::app::validate_and_normalize_url;
use crate::config::SitemapConfig;
use crate::error_handling::{describe_fetch_error, InitializationError};
use crate::initialization::init_client;

use super::parse::{is_sitemap_index, page_urls, sitemap_index_locs};

/// Discovers every page URL listed in the site's sitemaps.
///
/// Unreachable candidates and child sitemaps are logged and skipped; if none
/// is reachable the set is empty. Only building the HTTP client can fail.
pub async fn fetch_sitemap_urls(
    site: &str,
    config: &SitemapConfig,
) -> Result<BTreeSet<String>, InitializationError> {
    let mut urls = BTreeSet::new();
    let Some(normalized) = validate_and_normalize_url(site) else {
        warn!("Cannot discover sitemaps for invalid site '{site}'");
        return Ok(urls);
    };
    let base_url = normalized.trim_end_matches('/').to_string();
    let client = init_client(&config.user_agent, config.timeout, config.accept_invalid_certs)?;
    let mut processed: HashSet<String> = HashSet::new();

    for path in &config.paths {
        let sitemap_url = format!("{base_url}{path}");
        if processed.contains(&sitemap_url) {
            continue;
        }
        match fetch_sitemap(&client, &sitemap_url).await {
            Ok(Some(body)) => {
                processed.insert(sitemap_url.clone());
                let before = urls.len();
                collect_urls(&client, body, &base_url, config, &mut processed, &mut urls).await;
                info!(
                    "Successfully parsed sitemap: {sitemap_url} ({} new URLs)",
                    urls.len() - before
                );
            }
            Ok(None) => {}
            Err(message) => warn!("Failed to fetch sitemap {sitemap_url}: {message}"),
        }
    }

    Ok(urls)
}

/// Fetches one sitemap. `Ok(None)` means the server answered with something other than 200.
async fn fetch_sitemap(client: &reqwest::Client, url: &str) -> Result<Option<String>, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| describe_fetch_error(&e))?;
    if response.status() != StatusCode::OK {
        debug!("Sitemap {url} returned {}", response.status());
        return Ok(None);
    }
    response
        .text()
        .await
        .map(Some)
        .map_err(|e| describe_fetch_error(&e))
}

/// Walks one sitemap document and the child sitemaps it points to.
async fn collect_urls(
    client: &reqwest::Client,
    body: String,
    base_url: &str,
    config: &SitemapConfig,
    processed: &mut HashSet<String>,
    urls: &mut BTreeSet<String>,
) {
    let mut pending = vec![(body, 0usize)];
    while let Some((body, depth)) = pending.pop() {
        if !is_sitemap_index(&body) {
            urls.extend(page_urls(&body, &config.image_extensions));
            continue;
        }

        for loc in sitemap_index_locs(&body) {
            let nested_url = resolve_loc(base_url, &loc);
            if !processed.insert(nested_url.clone()) {
                continue;
            }
            if depth >= config.max_depth {
                warn!("Not following {nested_url}: sitemap nesting exceeds {}", config.max_depth);
                continue;
            }
            match fetch_sitemap(client, &nested_url).await {
                Ok(Some(nested)) => pending.push((nested, depth + 1)),
                Ok(None) => {}
                Err(message) => warn!("Failed to fetch nested sitemap {nested_url}: {message}"),
            }
        }
    }
}

/// Absolute `<loc>` values are kept; relative ones are joined onto the site root.
fn resolve_loc(base_url: &str, loc: &str) -> String {
    if loc.starts_with("http") {
        return loc.to_string();
    }
    Url::parse(base_url)
        .and_then(|base| base.join(loc))
        .map(String::from)
        .unwrap_or_else(|_| format!("{base_url}/{}", loc.trim_start_matches('/')))
}
