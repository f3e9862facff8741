//! Fetching authority documents.
//!
//! Authority endpoints are public infrastructure with uneven behavior: some
//! (the SPARQL ones especially) respond slowly, some fail intermittently
//! with 5xx under load, and some refuse direct cross-origin access and must
//! be reached through a relay. Fetches therefore carry a timeout, retry
//! transient failures with doubling delays, and accept an optional relay
//! prefix that completes the fetch URL.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{DereferencerError, Result};

/// User agent string identifying this dereferencer to authorities.
const USER_AGENT: &str = concat!("uri-dereferencer/", env!("CARGO_PKG_VERSION"));

/// Total attempts per document, the first one included.
const MAX_ATTEMPTS: u32 = 3;

/// Backoff before the second attempt (milliseconds); doubles per retry.
const BACKOFF_BASE_MS: u64 = 500;

/// Client shared across all fetches of a dereferencer.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// The URL actually requested: the resource URL, behind the relay prefix
/// when one applies.
fn fetch_target(resource_url: &str, relay: Option<&str>) -> String {
    match relay {
        Some(prefix) => format!("{prefix}{resource_url}"),
        None => resource_url.to_string(),
    }
}

/// Fetch an authority document as text.
///
/// A resource URL is deterministic and a 4xx response to it will not clear
/// up on a retry, so client errors fail immediately. Connect errors,
/// timeouts and 5xx responses are treated as transient and retried up to
/// [`MAX_ATTEMPTS`] times before giving up with
/// [`DereferencerError::RetriesExhausted`].
pub fn fetch_document(client: &Client, resource_url: &str, relay: Option<&str>) -> Result<String> {
    let url = fetch_target(resource_url, relay);
    let mut last_failure: Option<String> = None;

    for attempt in 1..=MAX_ATTEMPTS {
        if attempt > 1 {
            let delay = BACKOFF_BASE_MS << (attempt - 2);
            tracing::debug!(attempt, delay_ms = delay, "Backing off before retry");
            thread::sleep(Duration::from_millis(delay));
        }

        let failure = match client.get(&url).send() {
            Ok(response) if response.status().is_server_error() => {
                format!("server error: {}", response.status())
            }
            Ok(response) => {
                let body = response.error_for_status()?.text()?;
                return Ok(body);
            }
            Err(e) if e.is_connect() || e.is_timeout() => e.to_string(),
            Err(e) => return Err(DereferencerError::Http(e)),
        };

        tracing::warn!(
            attempt,
            max_attempts = MAX_ATTEMPTS,
            %failure,
            url = %url,
            "Transient fetch failure"
        );
        last_failure = Some(failure);
    }

    Err(DereferencerError::RetriesExhausted {
        url,
        attempts: MAX_ATTEMPTS,
        message: last_failure.unwrap_or_else(|| "unknown failure".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        assert!(create_client().is_ok());
    }

    #[test]
    fn test_fetch_target_without_relay_is_the_resource_url() {
        assert_eq!(
            fetch_target("http://id.worldcat.org/fast/1204021/rdf.xml", None),
            "http://id.worldcat.org/fast/1204021/rdf.xml"
        );
    }

    #[test]
    fn test_fetch_target_prepends_relay_verbatim() {
        assert_eq!(
            fetch_target(
                "http://id.worldcat.org/fast/1204021/rdf.xml",
                Some("https://relay.example/fetch?url=")
            ),
            "https://relay.example/fetch?url=http://id.worldcat.org/fast/1204021/rdf.xml"
        );
    }
}
