//! Live checks against the audited site: robots.txt, sitemap.xml and schema markup.

use log::{info, warn};
use reqwest::StatusCode;

use crate::app::normalize_base_url;
use crate::config::{AuditConfig, PRESENCE_CHECK_TIMEOUT};
use crate::initialization::init_client;
use crate::schema::check_schema_markup;

use super::types::{SchemaOutcome, SiteChecks};

/// True only if `url` answers a GET with status 200.
pub async fn url_is_available(client: &reqwest::Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) => response.status() == StatusCode::OK,
        Err(e) => {
            warn!("Presence check failed for {url}: {e}");
            false
        }
    }
}

/// Runs the presence checks and the schema probe concurrently.
///
/// `site` is a host or URL; `None` means no domain could be derived, which
/// leaves both presence checks unavailable and the schema row explained.
/// Network failures never escape: they become "unavailable" results.
pub async fn run_site_checks(site: Option<&str>, config: &AuditConfig) -> SiteChecks {
    let Some(root) = site.and_then(normalize_base_url) else {
        warn!("No site root available; skipping live site checks");
        return SiteChecks {
            schema: SchemaOutcome::NoDomain,
            ..Default::default()
        };
    };

    let client = match init_client(&config.user_agent, PRESENCE_CHECK_TIMEOUT, config.accept_invalid_certs) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("Cannot build client for presence checks: {e}");
            None
        }
    };
    let robots_url = format!("{root}/robots.txt");
    let sitemap_url = format!("{root}/sitemap.xml");

    let presence = |url: String| {
        let client = client.clone();
        async move {
            match client {
                Some(client) => url_is_available(&client, &url).await,
                None => false,
            }
        }
    };

    let (robots_available, sitemap_available, schema) = tokio::join!(
        presence(robots_url),
        presence(sitemap_url),
        check_schema_markup(&root, &config.schema),
    );

    let schema = match schema {
        Ok(types) => SchemaOutcome::Found(types),
        Err(e) => {
            warn!("Schema check failed for {root}: {e}");
            SchemaOutcome::Failed(e.to_string())
        }
    };
    info!("Site checks for {root}: robots.txt={robots_available}, sitemap.xml={sitemap_available}");

    SiteChecks {
        robots_available,
        sitemap_available,
        schema,
    }
}
