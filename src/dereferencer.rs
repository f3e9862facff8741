//! End-to-end dereferencing: dispatch, fetch, render.

use reqwest::blocking::Client;
use serde::Serialize;

use crate::error::Result;
use crate::http::{create_client, fetch_document};
use crate::registry::ResolverRegistry;
use crate::resolvers::default_registry;

/// Outcome of dereferencing a matched URI.
#[derive(Debug, Serialize)]
pub struct Dereferenced {
    /// Display name of the authority that handled the URI.
    pub authority: String,
    /// Machine-readable document URL the body was fetched from.
    pub resource_url: String,
    /// Rendered definition-list markup.
    pub markup: String,
}

/// Dispatches URIs against a registry and fetches and renders the matched
/// authority's document.
pub struct Dereferencer {
    registry: ResolverRegistry,
    client: Client,
    relay: Option<String>,
}

impl Dereferencer {
    /// Dereferencer over the built-in resolver set, without a CORS relay.
    pub fn new() -> Result<Self> {
        Self::with_registry(default_registry())
    }

    /// Dereferencer over a caller-assembled registry.
    pub fn with_registry(registry: ResolverRegistry) -> Result<Self> {
        Ok(Self {
            registry,
            client: create_client()?,
            relay: None,
        })
    }

    /// Set the relay URL prefix used for authorities that require proxying.
    ///
    /// The resource URL is appended verbatim, so the prefix must end where
    /// the relay expects the target URL to start.
    #[must_use]
    pub fn with_relay(mut self, relay: impl Into<String>) -> Self {
        self.relay = Some(relay.into());
        self
    }

    /// The registry this dereferencer dispatches against.
    #[must_use]
    pub fn registry(&self) -> &ResolverRegistry {
        &self.registry
    }

    /// Dereference a URI.
    ///
    /// Returns `Ok(None)` when no registered authority recognizes the URI.
    /// Fetch failures surface as errors; a fetched but malformed body does
    /// not, and renders as an empty definition list.
    pub fn dereference(&self, uri: &str) -> Result<Option<Dereferenced>> {
        let Some(resolver) = self.registry.dispatch(uri) else {
            tracing::debug!(uri, "No resolver matched");
            return Ok(None);
        };

        let resource_url = resolver.resource_url(uri);
        let relay = if resolver.options().requires_proxy {
            if self.relay.is_none() {
                tracing::warn!(
                    authority = resolver.name(),
                    "Authority requires a relay but none is configured, fetching directly"
                );
            }
            self.relay.as_deref()
        } else {
            None
        };

        tracing::debug!(authority = resolver.name(), url = %resource_url, "Fetching");
        let body = fetch_document(&self.client, &resource_url, relay)?;

        Ok(Some(Dereferenced {
            authority: resolver.name().to_string(),
            resource_url,
            markup: resolver.render(uri, &body),
        }))
    }
}
