//! Error types for the dereferencer.
//!
//! A missing or malformed field inside an authority's response body is
//! deliberately *not* an error: resolvers omit the row and keep going.
//! The variants here cover the caller-side concerns only.

use thiserror::Error;

/// Main error type for the dereferencer library.
#[derive(Debug, Error)]
pub enum DereferencerError {
    /// No registered authority recognizes the URI.
    ///
    /// Dispatch itself reports this as `None` rather than an error; this
    /// variant exists for callers (like the CLI) that need a hard failure.
    #[error("No dereferencer available for URI: {0}")]
    NoResolver(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serializing a result to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// All retry attempts were exhausted.
    #[error("Failed to fetch {url} after {attempts} attempts: {message}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        message: String,
    },
}

/// Result type alias for dereferencer operations.
pub type Result<T> = std::result::Result<T, DereferencerError>;
