//! Deep-access helpers for the four extraction strategy families.
//!
//! Every helper evaluates an optional chain of lookups through a parsed
//! document and returns `Option` rather than failing: an absent or null
//! intermediate link is "absent", never an error. All per-authority
//! optional-field probing is built on this contract.

pub mod json;
pub mod jsonld;
pub mod sparql;
pub mod xml;

pub use json::{probe, Probe};
