//! Fetch error description.
//!
//! Turns `reqwest` failures into the one-line messages stored on a page's
//! result record.

/// Describes a `reqwest::Error` for a result record.
///
/// HTTP status failures read like `404 Client Error: Not Found for url: <url>`;
/// transport failures get a short category prefix followed by the error text.
pub fn describe_fetch_error(error: &reqwest::Error) -> String {
    if let Some(status) = error.status() {
        let kind = if status.is_server_error() {
            "Server Error"
        } else {
            "Client Error"
        };
        let reason = status.canonical_reason().unwrap_or("Unknown");
        return match error.url() {
            Some(url) => format!("{} {}: {} for url: {}", status.as_u16(), kind, reason, url),
            None => format!("{} {}: {}", status.as_u16(), kind, reason),
        };
    }

    let prefix = if error.is_timeout() {
        "Timeout"
    } else if error.is_connect() {
        "Connection error"
    } else if error.is_redirect() {
        "Redirect error"
    } else if error.is_decode() || error.is_body() {
        "Body error"
    } else if error.is_builder() {
        "Invalid request"
    } else {
        "Request error"
    };
    format!("{prefix}: {error}")
}

/// Describes a non-success status that was returned without a `reqwest::Error`.
pub fn describe_status(status: reqwest::StatusCode, url: &str) -> String {
    let kind = if status.is_server_error() {
        "Server Error"
    } else {
        "Client Error"
    };
    format!(
        "{} {}: {} for url: {}",
        status.as_u16(),
        kind,
        status.canonical_reason().unwrap_or("Unknown"),
        url
    )
}
