//! URI Dereferencer - Resolve linked data URIs to human-readable markup.
//!
//! This crate dispatches URIs from well-known linked data authorities
//! (Wikidata, the Library of Congress, Geonames, VIAF and others) to the
//! resolver registered for the authority, fetches the matching
//! machine-readable document, and renders selected fields as an HTML
//! definition list.
//!
//! # Example
//!
//! ```
//! use uri_dereferencer::default_registry;
//!
//! let registry = default_registry();
//! let resolver = registry
//!     .dispatch("https://www.wikidata.org/wiki/Q42")
//!     .unwrap();
//! assert_eq!(resolver.name(), "Wikidata");
//! assert_eq!(
//!     resolver.resource_url("https://www.wikidata.org/wiki/Q42"),
//!     "https://www.wikidata.org/wiki/Special:EntityData/Q42.json"
//! );
//! ```
//!
//! # Architecture
//!
//! The dereferencer is organized into several modules:
//!
//! - [`config`]: Configuration constants
//! - [`error`]: Error types and Result alias
//! - [`fields`]: Ordered label/value field sets
//! - [`markup`]: HTML rendering of field sets
//! - [`access`]: Format-specific read helpers (JSON, JSON-LD, XML, SPARQL)
//! - [`resolver`]: The per-authority resolver capability set
//! - [`registry`]: Ordered registry with first-match dispatch
//! - [`resolvers`]: The built-in authority resolvers
//! - [`http`]: HTTP client for fetching authority documents
//! - [`dereferencer`]: End-to-end dispatch, fetch and render
//! - [`cli`]: Command-line interface

pub mod access;
pub mod cli;
pub mod config;
pub mod dereferencer;
pub mod error;
pub mod fields;
pub mod http;
pub mod markup;
pub mod registry;
pub mod resolver;
pub mod resolvers;

// Re-export main entry points
pub use dereferencer::{Dereferenced, Dereferencer};
pub use resolvers::default_registry;

// Re-export commonly used items
pub use error::{DereferencerError, Result};
pub use fields::{FieldSet, FieldValue};
pub use registry::ResolverRegistry;
pub use resolver::{Resolver, ResolverOptions};
