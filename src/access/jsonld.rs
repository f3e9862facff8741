//! JSON-LD graph-node lookup.
//!
//! Authorities publishing JSON-LD return either a top-level array of graph
//! nodes (expanded form, e.g. id.loc.gov) or a document carrying the nodes
//! under an `@graph` key (e.g. data.bibliotheken.nl). A node is addressed
//! by its `@id`; properties hold literals, language-tagged value objects,
//! or reference objects with a nested identifier.

use serde_json::Value;

use super::json::probe;

/// The sequence of graph nodes in a JSON-LD document.
///
/// Accepts both a top-level array and a document with `@graph`. A document
/// in neither shape yields `None`, which downstream extraction treats as
/// an empty graph.
#[must_use]
pub fn graph_nodes(doc: &Value) -> Option<&Vec<Value>> {
    match doc {
        Value::Array(nodes) => Some(nodes),
        Value::Object(_) => doc.get("@graph").and_then(Value::as_array),
        _ => None,
    }
}

/// First node whose `@id` equals the canonical identifier.
///
/// Graphs are assumed to contain at most one matching node; on collision
/// the first one wins.
#[must_use]
pub fn node_by_id<'a>(doc: &'a Value, id: &str) -> Option<&'a Value> {
    graph_nodes(doc)?
        .iter()
        .find(|node| node.get("@id").and_then(Value::as_str) == Some(id))
}

/// First node whose `@id` contains the given fragment.
#[must_use]
pub fn node_by_id_containing<'a>(doc: &'a Value, fragment: &str) -> Option<&'a Value> {
    graph_nodes(doc)?.iter().find(|node| {
        node.get("@id")
            .and_then(Value::as_str)
            .is_some_and(|id| id.contains(fragment))
    })
}

/// First `@value` literal of a property in expanded form.
#[must_use]
pub fn first_literal(node: &Value, property: &str) -> Option<String> {
    probe(node).key(property).index(0).key("@value").string()
}

/// All `@value` literals of a property, in source order.
#[must_use]
pub fn literals(node: &Value, property: &str) -> Vec<String> {
    node.get(property)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(|v| probe(v).key("@value").string())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expanded_doc() -> Value {
        json!([
            {
                "@id": "http://id.loc.gov/authorities/subjects/sh85003553",
                "http://www.w3.org/2004/02/skos/core#prefLabel": [
                    {"@value": "Foo"}
                ],
                "http://www.w3.org/2008/05/skos-xl#altLabel": [
                    {"@value": "first"},
                    {"@value": "second"},
                    {"@language": "en"}
                ]
            },
            {"@id": "http://id.loc.gov/other"}
        ])
    }

    #[test]
    fn test_graph_nodes_top_level_array() {
        let doc = expanded_doc();
        assert_eq!(graph_nodes(&doc).map(Vec::len), Some(2));
    }

    #[test]
    fn test_graph_nodes_at_graph_key() {
        let doc = json!({"@graph": [{"@id": "a"}]});
        assert_eq!(graph_nodes(&doc).map(Vec::len), Some(1));
    }

    #[test]
    fn test_graph_nodes_wrong_shape() {
        assert!(graph_nodes(&json!({"entities": {}})).is_none());
        assert!(graph_nodes(&json!("text")).is_none());
    }

    #[test]
    fn test_node_by_id() {
        let doc = expanded_doc();
        let node = node_by_id(&doc, "http://id.loc.gov/authorities/subjects/sh85003553");
        assert!(node.is_some());
        assert!(node_by_id(&doc, "http://id.loc.gov/nothing").is_none());
    }

    #[test]
    fn test_node_by_id_containing() {
        let doc = json!({"@graph": [
            {"@id": "http://data.bibliotheken.nl/doc/thes/p123"},
            {"@id": "http://data.bibliotheken.nl/id/thes/p123", "x": 1}
        ]});
        let node = node_by_id_containing(&doc, "id/thes/");
        assert!(node.is_some());
        assert_eq!(node.and_then(|n| n.get("x")), Some(&json!(1)));
    }

    #[test]
    fn test_first_literal() {
        let doc = expanded_doc();
        let node = node_by_id(&doc, "http://id.loc.gov/authorities/subjects/sh85003553")
            .expect("node present");
        assert_eq!(
            first_literal(node, "http://www.w3.org/2004/02/skos/core#prefLabel"),
            Some("Foo".to_string())
        );
        assert_eq!(first_literal(node, "http://example.org/absent"), None);
    }

    #[test]
    fn test_literals_skip_entries_without_value() {
        let doc = expanded_doc();
        let node = node_by_id(&doc, "http://id.loc.gov/authorities/subjects/sh85003553")
            .expect("node present");
        assert_eq!(
            literals(node, "http://www.w3.org/2008/05/skos-xl#altLabel"),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}
