//! Configuration constants shared across the dereferencer.

/// HTTP timeout in seconds.
///
/// Authority endpoints (particularly SPARQL ones) can be slow; 30 seconds
/// accommodates them without hanging the caller indefinitely.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Preferred language tag when an authority publishes multiple
/// language-tagged variants of the same value.
pub const PREFERRED_LANGUAGE: &str = "en";

/// Separator used when a multi-valued field is joined into a single row.
pub const VALUE_SEPARATOR: &str = "; ";

/// Anchor target used by attribution links back to the subject URI.
///
/// A fixed target makes repeated dereferences reuse the same browsing
/// context instead of opening a new one per click.
pub const LINK_TARGET: &str = "uri-dereference";
