//! URL validation and normalization utilities.

use log::warn;
use url::{Position, Url};

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL.
///
/// Adds https:// prefix if missing, then validates that the URL is syntactically
/// valid and uses http/https scheme. Rejects URLs longer than MAX_URL_LENGTH.
/// Logs a warning and returns None if the URL is invalid, too long, or uses an unsupported scheme.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// `Some(normalized_url)` if the URL is valid and should be processed, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    // Checked after the prefix is added so the limit applies to what is fetched
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    match Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Skipping unsupported scheme for URL: {url}");
                None
            }
        },
        _ => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

/// Reduces a domain or URL to its site root, `scheme://host[:port]`.
///
/// A bare domain gets `https://`. An explicit scheme is kept.
pub fn normalize_base_url(domain: &str) -> Option<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        return None;
    }
    let with_scheme = if domain.contains("://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };
    let parsed = Url::parse(&with_scheme).ok()?;
    parsed.host_str().filter(|h| !h.is_empty())?;
    Some(parsed[..Position::BeforePath].to_string())
}

/// Host part of a crawled address: the third `/`-separated piece when the
/// address has a scheme, else the first.
pub fn domain_from_address(address: &str) -> Option<String> {
    let address = address.trim();
    let part = if address.contains("://") {
        address.split('/').nth(2)
    } else {
        address.split('/').next()
    };
    part.filter(|p| !p.is_empty()).map(str::to_string)
}
