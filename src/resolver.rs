//! The resolver capability set: one implementation per authority.

/// Per-resolver fetch configuration.
///
/// `requires_proxy` is set when the upstream authority's responses lack
/// permissive cross-origin headers, signaling the caller to route the fetch
/// through a relay instead of directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Route the fetch through a CORS relay.
    pub requires_proxy: bool,
}

impl ResolverOptions {
    /// Options for an authority that must be fetched through a relay.
    #[must_use]
    pub fn proxied() -> Self {
        Self {
            requires_proxy: true,
        }
    }
}

/// Capability set every authority resolver implements.
///
/// Descriptors are constructed once and are immutable and stateless across
/// calls, apart from static per-authority vocabulary tables baked in at
/// construction. They are therefore safely shared read-only between
/// concurrent dereferences.
pub trait Resolver: Send + Sync {
    /// Fixed authority display label for attribution.
    fn name(&self) -> &str;

    /// Fetch configuration for this authority.
    fn options(&self) -> ResolverOptions {
        ResolverOptions::default()
    }

    /// Pure predicate over the URI string.
    fn matches(&self, uri: &str) -> bool;

    /// Deterministic machine-readable document URL for a matched URI.
    ///
    /// Only ever invoked after [`Resolver::matches`] returned true for the
    /// same URI, so implementations may re-derive identifier fragments
    /// without re-validating structure. May change host or extension; an
    /// authority without an item-level endpoint instead embeds a full query
    /// payload percent-encoded into a query parameter.
    fn resource_url(&self, uri: &str) -> String;

    /// Parse `body` in the authority's native format and render the
    /// extracted fields as markup.
    ///
    /// Never fails: missing optional data omits rows, and a malformed or
    /// mis-shaped body degrades to an empty definition list.
    fn render(&self, uri: &str, body: &str) -> String;
}
