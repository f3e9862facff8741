//! Namespace-aware XML path queries over roxmltree documents.
//!
//! Paths are slash-separated `prefix:local` steps resolved against a
//! caller-supplied prefix→namespace table. The first step is searched among
//! all descendants of the document; subsequent steps match direct children,
//! mirroring a `//a/b/c` query.

use roxmltree::{Document, Node};

use crate::config::VALUE_SEPARATOR;

/// Prefix → namespace URI table supplied by the caller.
pub type Namespaces<'a> = &'a [(&'a str, &'a str)];

/// Namespace URI bound to the reserved `xml:` prefix (used for `xml:lang`).
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// All nodes matching a namespace-qualified path.
#[must_use]
pub fn find_nodes<'a, 'input>(
    doc: &'a Document<'input>,
    path: &str,
    ns: Namespaces<'_>,
) -> Vec<Node<'a, 'input>> {
    let mut steps = path.split('/');
    let Some(first) = steps.next() else {
        return Vec::new();
    };

    let mut current: Vec<Node<'a, 'input>> = doc
        .descendants()
        .filter(|node| matches_step(*node, first, ns))
        .collect();

    for step in steps {
        current = current
            .iter()
            .flat_map(|node| node.children().filter(|child| matches_step(*child, step, ns)))
            .collect();
    }

    current
}

/// Text of the first node matching the path, or `None` if no node matches
/// or its text is empty.
#[must_use]
pub fn node_text(doc: &Document<'_>, path: &str, ns: Namespaces<'_>) -> Option<String> {
    find_nodes(doc, path, ns)
        .into_iter()
        .find_map(|node| non_empty_text(node))
}

/// Like [`node_text`], keeping only nodes whose `xml:lang` equals `lang`.
#[must_use]
pub fn node_text_lang(
    doc: &Document<'_>,
    path: &str,
    ns: Namespaces<'_>,
    lang: &str,
) -> Option<String> {
    find_nodes(doc, path, ns)
        .into_iter()
        .filter(|node| node.attribute((XML_NS, "lang")) == Some(lang))
        .find_map(non_empty_text)
}

/// Texts of all nodes matching the path, joined with `"; "` in document
/// order; `None` when nothing matches.
#[must_use]
pub fn joined_node_texts(doc: &Document<'_>, path: &str, ns: Namespaces<'_>) -> Option<String> {
    let texts: Vec<String> = find_nodes(doc, path, ns)
        .into_iter()
        .filter_map(non_empty_text)
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.join(VALUE_SEPARATOR))
    }
}

fn matches_step(node: Node<'_, '_>, step: &str, ns: Namespaces<'_>) -> bool {
    if !node.is_element() {
        return false;
    }
    let (prefix, local) = match step.split_once(':') {
        Some(parts) => parts,
        None => ("", step),
    };
    let expected_ns = ns
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri);

    node.tag_name().name() == local && node.tag_name().namespace() == expected_ns
}

fn non_empty_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GN_NS: Namespaces<'static> = &[
        ("gn", "http://www.geonames.org/ontology#"),
        ("wgs84_pos", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
    ];

    const SKOS_NS: Namespaces<'static> = &[
        ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ];

    const GEONAMES_XML: &str = r#"<rdf:RDF
        xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        xmlns:gn="http://www.geonames.org/ontology#"
        xmlns:wgs84_pos="http://www.w3.org/2003/01/geo/wgs84_pos#">
        <gn:Feature rdf:about="https://sws.geonames.org/2750405/">
            <gn:name>Nederland</gn:name>
            <gn:officialName xml:lang="nl">Nederland</gn:officialName>
            <gn:officialName xml:lang="en">Netherlands</gn:officialName>
            <wgs84_pos:lat>52.25</wgs84_pos:lat>
        </gn:Feature>
    </rdf:RDF>"#;

    #[test]
    fn test_node_text() {
        let doc = Document::parse(GEONAMES_XML).expect("valid xml");
        assert_eq!(
            node_text(&doc, "gn:Feature/gn:name", GN_NS),
            Some("Nederland".to_string())
        );
        assert_eq!(node_text(&doc, "gn:Feature/gn:alternateName", GN_NS), None);
    }

    #[test]
    fn test_node_text_requires_matching_namespace() {
        let doc = Document::parse(GEONAMES_XML).expect("valid xml");
        // Same local names but a table binding gn to the wrong URI
        let wrong: Namespaces<'_> = &[("gn", "http://example.org/other#")];
        assert_eq!(node_text(&doc, "gn:Feature/gn:name", wrong), None);
    }

    #[test]
    fn test_node_text_lang() {
        let doc = Document::parse(GEONAMES_XML).expect("valid xml");
        assert_eq!(
            node_text_lang(&doc, "gn:Feature/gn:officialName", GN_NS, "en"),
            Some("Netherlands".to_string())
        );
        assert_eq!(
            node_text_lang(&doc, "gn:Feature/gn:officialName", GN_NS, "fr"),
            None
        );
    }

    #[test]
    fn test_joined_node_texts() {
        let xml = r#"<rdf:RDF
            xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:skos="http://www.w3.org/2004/02/skos/core#">
            <rdf:Description>
                <skos:altLabel>eerste</skos:altLabel>
                <skos:altLabel>tweede</skos:altLabel>
            </rdf:Description>
        </rdf:RDF>"#;
        let doc = Document::parse(xml).expect("valid xml");
        assert_eq!(
            joined_node_texts(&doc, "rdf:Description/skos:altLabel", SKOS_NS),
            Some("eerste; tweede".to_string())
        );
        assert_eq!(
            joined_node_texts(&doc, "rdf:Description/skos:prefLabel", SKOS_NS),
            None
        );
    }

    #[test]
    fn test_descendant_search_from_any_depth() {
        let doc = Document::parse(GEONAMES_XML).expect("valid xml");
        // wgs84_pos:lat found even though gn:Feature is not the root
        assert_eq!(
            node_text(&doc, "gn:Feature/wgs84_pos:lat", GN_NS),
            Some("52.25".to_string())
        );
    }
}
