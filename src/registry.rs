//! Ordered resolver registry and first-match dispatch.

use crate::resolver::Resolver;

/// Ordered collection of authority resolvers.
///
/// Dispatch walks resolvers in registration order and returns the first
/// whose predicate matches; there is no scoring or ambiguity resolution.
/// Where two patterns could both match a URI, registration order is the
/// tie-break, so narrower patterns must be registered before broader ones.
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Append a resolver to the dispatch order.
    pub fn register(&mut self, resolver: impl Resolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    /// Return the first resolver matching the URI.
    ///
    /// `None` is not an error condition; it signals "unknown authority"
    /// and the caller decides on a fallback display.
    #[must_use]
    pub fn dispatch(&self, uri: &str) -> Option<&dyn Resolver> {
        self.resolvers
            .iter()
            .find(|resolver| resolver.matches(uri))
            .map(|resolver| resolver.as_ref())
    }

    /// Authority names in dispatch order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Number of registered resolvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
