//! Plain JSON path walking.
//!
//! [`Probe`] evaluates a chain of key/index lookups through a
//! [`serde_json::Value`], resolving to the leaf value if every link exists
//! and to "absent" if any intermediate link is missing or null. This
//! replaces exception-suppressing optional-chain evaluation with an
//! explicit get-or-none at each link.

use serde_json::Value;

/// A partially evaluated lookup chain.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a>(Option<&'a Value>);

/// Start a lookup chain at the document root.
///
/// # Examples
/// ```
/// use uri_dereferencer::access::probe;
///
/// let json = serde_json::json!({"labels": {"en": {"value": "Douglas Adams"}}});
/// let label = probe(&json).key("labels").key("en").key("value").string();
/// assert_eq!(label, Some("Douglas Adams".to_string()));
///
/// let missing = probe(&json).key("descriptions").key("en").key("value").string();
/// assert_eq!(missing, None);
/// ```
pub fn probe(value: &Value) -> Probe<'_> {
    Probe(Some(value))
}

impl<'a> Probe<'a> {
    /// Follow an object key.
    #[must_use]
    pub fn key(self, key: &str) -> Self {
        Probe(self.0.and_then(|v| v.get(key)))
    }

    /// Follow an array index.
    #[must_use]
    pub fn index(self, index: usize) -> Self {
        Probe(self.0.and_then(|v| v.get(index)))
    }

    /// Resolve to the underlying value, if the whole chain existed.
    #[must_use]
    pub fn value(self) -> Option<&'a Value> {
        self.0.filter(|v| !v.is_null())
    }

    /// Resolve to an array.
    #[must_use]
    pub fn array(self) -> Option<&'a Vec<Value>> {
        self.value().and_then(Value::as_array)
    }

    /// Resolve to a display string.
    ///
    /// Scalars other than strings (numbers, booleans) are stringified;
    /// objects, arrays, and null resolve to absent.
    #[must_use]
    pub fn string(self) -> Option<String> {
        self.value().and_then(value_to_string)
    }

    /// Whether the chain resolved to a non-null leaf.
    #[must_use]
    pub fn is_set(self) -> bool {
        self.value().is_some()
    }
}

/// Display string for a scalar JSON value.
#[must_use]
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a body as JSON, degrading to `Value::Null` on malformed input.
///
/// Extraction over `Null` resolves every probe to absent, so a malformed
/// body yields an empty field set instead of a failure.
#[must_use]
pub fn parse_or_null(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "body is not valid JSON; treating as empty");
            Value::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probe_nested_keys() {
        let doc = json!({"a": {"b": {"c": "leaf"}}});
        assert_eq!(probe(&doc).key("a").key("b").key("c").string(), Some("leaf".to_string()));
    }

    #[test]
    fn test_probe_missing_link_is_absent() {
        let doc = json!({"a": {"b": "x"}});
        assert_eq!(probe(&doc).key("a").key("missing").key("c").string(), None);
        assert!(!probe(&doc).key("z").is_set());
    }

    #[test]
    fn test_probe_null_leaf_is_absent() {
        let doc = json!({"a": null});
        assert!(!probe(&doc).key("a").is_set());
        assert_eq!(probe(&doc).key("a").string(), None);
    }

    #[test]
    fn test_probe_array_index() {
        let doc = json!({"items": ["first", "second"]});
        assert_eq!(probe(&doc).key("items").index(0).string(), Some("first".to_string()));
        assert_eq!(probe(&doc).key("items").index(5).string(), None);
    }

    #[test]
    fn test_probe_index_on_object_is_absent() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(probe(&doc).key("a").index(0).string(), None);
    }

    #[test]
    fn test_scalar_stringification() {
        let doc = json!({"n": 1940, "b": true});
        assert_eq!(probe(&doc).key("n").string(), Some("1940".to_string()));
        assert_eq!(probe(&doc).key("b").string(), Some("true".to_string()));
    }

    #[test]
    fn test_composite_values_are_not_strings() {
        let doc = json!({"obj": {}, "arr": []});
        assert_eq!(probe(&doc).key("obj").string(), None);
        assert_eq!(probe(&doc).key("arr").string(), None);
    }

    #[test]
    fn test_parse_or_null() {
        assert_eq!(parse_or_null("not json"), Value::Null);
        assert_eq!(parse_or_null(r#"{"a":1}"#), json!({"a":1}));
    }
}
