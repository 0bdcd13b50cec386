//! Sitemap discovery and URL classification.

mod analysis;
mod classify;
mod discover;
mod parse;

pub use analysis::{analyze_sitemap_categories, ClassifiedUrl, SitemapAnalysis};
pub use classify::{Classification, UrlClassifier};
pub use discover::fetch_sitemap_urls;
pub use parse::{is_sitemap_index, page_urls, sitemap_index_locs};

use crate::config::{ClassifierConfig, SitemapConfig};
use crate::error_handling::InitializationError;

/// Discovers the site's sitemap URLs and classifies them.
pub async fn run_sitemap_analysis(
    site: &str,
    sitemap_config: &SitemapConfig,
    classifier_config: &ClassifierConfig,
) -> Result<SitemapAnalysis, InitializationError> {
    let urls = fetch_sitemap_urls(site, sitemap_config).await?;
    let classifier = UrlClassifier::new(classifier_config);
    Ok(analyze_sitemap_categories(&urls, &classifier))
}
