//! SPARQL JSON results (binding table) reads.
//!
//! The standard results form is `{"results": {"bindings": [row, ...]}}`
//! with each row mapping a query variable to `{"value": ...}`. Reads are
//! taken from the first (typically only) row.

use serde_json::Value;

use super::json::probe;

/// First solution row of a standard SPARQL JSON results document.
#[must_use]
pub fn first_row(doc: &Value) -> Option<&Value> {
    probe(doc).key("results").key("bindings").index(0).value()
}

/// Value of a named variable binding within a row.
#[must_use]
pub fn bound_value(row: &Value, variable: &str) -> Option<String> {
    probe(row).key(variable).key("value").string()
}

/// Named binding from the first row.
#[must_use]
pub fn first_binding(doc: &Value, variable: &str) -> Option<String> {
    first_row(doc).and_then(|row| bound_value(row, variable))
}
