//! HTTP fetcher implementation
//!
//! This module performs the single retrieval attempt for each candidate URL
//! and classifies the result. There is exactly one failure mode the rest of
//! the crawler cares about distinguishing: a response that is HTML rather
//! than a plain-text manifest. Everything else (non-success status, DNS
//! failure, timeout, unreadable body) collapses into "not present".

use crate::config::FetchConfig;
use reqwest::Client;

/// Outcome of a manifest fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// Usable manifest text
    Found(String),

    /// The URL answered with HTML; the manifest convention was not honored
    HtmlRejected,

    /// Non-success status or transport failure; treated as absence
    Missing,
}

/// Builds the HTTP client shared by a whole run
///
/// Redirects follow reqwest's default policy; gzip and brotli responses are
/// decompressed transparently.
///
/// # Arguments
///
/// * `config` - Fetch configuration (timeouts and user agent)
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one candidate URL and classifies the response
///
/// A single attempt, no retries. Non-success statuses and transport errors
/// are logged at debug and reported as [`FetchOutcome::Missing`] so the
/// traversal continues; only HTML detection is surfaced as its own outcome.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_manifest(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Fetch failed for {}: {}", url, e);
            return FetchOutcome::Missing;
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{} returned {}", url, status);
        return FetchOutcome::Missing;
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Failed to read body from {}: {}", url, e);
            return FetchOutcome::Missing;
        }
    };

    if is_html_content(&content_type, &body) {
        tracing::debug!("{} answered with HTML, rejecting", url);
        return FetchOutcome::HtmlRejected;
    }

    FetchOutcome::Found(body)
}

/// Classifies a response as HTML
///
/// Either the declared content type carries the `text/html` marker, or the
/// body itself opens with an HTML document prefix regardless of what the
/// server declared.
pub(crate) fn is_html_content(content_type: &str, body: &str) -> bool {
    if content_type.contains("text/html") {
        return true;
    }

    let head: String = body.trim_start().chars().take(14).collect();
    let head = head.to_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_content_type() {
        assert!(is_html_content("text/html", "# Docs"));
        assert!(is_html_content("text/html; charset=utf-8", "# Docs"));
    }

    #[test]
    fn test_html_body_prefix() {
        assert!(is_html_content("text/plain", "<html><body>hi</body></html>"));
        assert!(is_html_content("text/plain", "<!DOCTYPE html><html></html>"));
    }

    #[test]
    fn test_html_body_prefix_with_leading_whitespace() {
        assert!(is_html_content("text/plain", "\n\n  <HTML lang=\"en\">"));
    }

    #[test]
    fn test_plain_text_accepted() {
        assert!(!is_html_content("text/plain", "# Example Docs\n\nWelcome."));
        assert!(!is_html_content("", "# Example Docs"));
    }

    #[test]
    fn test_html_mention_in_body_is_not_html() {
        assert!(!is_html_content(
            "text/plain",
            "This manifest links to an <html> rendering guide."
        ));
    }

    #[test]
    fn test_empty_body_accepted() {
        assert!(!is_html_content("text/plain", ""));
    }
}
