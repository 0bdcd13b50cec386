//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Builds the HTTP client used for one kind of outbound request.
///
/// Every component builds its own client so timeouts, User-Agent and
/// certificate handling stay per-purpose: header fetching, schema probing,
/// sitemap discovery and presence checks each have their own settings.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    user_agent: &str,
    timeout: Duration,
    accept_invalid_certs: bool,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .user_agent(user_agent)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_accepts_custom_settings() {
        let client = init_client("SEOHeaderAnalyzer/1.0", Duration::from_secs(20), true);
        assert!(client.is_ok());
    }
}
