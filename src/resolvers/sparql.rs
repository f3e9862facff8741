//! Resolvers for authorities without an item-level document endpoint.
//!
//! These build a SPARQL query around the matched identifier and embed it
//! percent-encoded in the resource URL's query string.

use std::sync::LazyLock;

use regex::Regex;

use crate::access::json::{parse_or_null, probe};
use crate::access::sparql::first_binding;
use crate::fields::FieldSet;
use crate::markup;
use crate::resolver::Resolver;

// ---------------------------------------------------------------------------
// Getty Vocabularies (AAT, TGN, ULAN)
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GETTY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://vocab\.getty\.edu/(aat|tgn|ulan)/(.+)$").expect("valid regex")
});

/// Getty Vocabularies (<https://www.getty.edu/research/tools/vocabularies/>).
///
/// Covers the AAT, TGN and ULAN schemes through the shared SPARQL endpoint.
pub struct GettyVocabularies;

impl GettyVocabularies {
    fn capture<'a>(&self, uri: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = GETTY_PATTERN.captures(uri)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

impl Resolver for GettyVocabularies {
    fn name(&self) -> &str {
        "Getty Vocabularies"
    }

    fn matches(&self, uri: &str) -> bool {
        GETTY_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.capture(uri)
            .map(|(scheme, id)| {
                let query = format!(
                    "SELECT ?Subject ?Term ?ScopeNote {{ \
                     ?Subject a skos:Concept ; \
                     skos:inScheme {scheme}: ; \
                     dc:identifier \"{id}\" ; \
                     skosxl:prefLabel [xl:literalForm ?Term] . \
                     OPTIONAL {{?Subject skos:scopeNote [dct:language gvp_lang:en; rdf:value ?ScopeNote]}} }}"
                );
                format!(
                    "http://vocab.getty.edu/sparql.json?query={}",
                    urlencoding::encode(&query)
                )
            })
            .unwrap_or_default()
    }

    fn render(&self, _uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        fields.insert_opt("Term", first_binding(&json, "Term"));
        fields.insert_opt("Scope note", first_binding(&json, "ScopeNote"));

        markup::definition_list(&fields)
    }
}

// ---------------------------------------------------------------------------
// RKDartists
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static RKD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://data\.rkd\.nl/artists/(.*)").expect("valid regex"));

/// RKDartists van het RKD, Nederlands Instituut voor Kunstgeschiedenis
/// (<https://rkd.nl>).
///
/// The Triply-hosted endpoint returns its simplified results form (an array
/// of plain binding objects) rather than the standard SPARQL JSON table.
pub struct RkdArtists;

impl RkdArtists {
    fn artist_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        RKD_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Resolver for RkdArtists {
    fn name(&self) -> &str {
        "RKDartists"
    }

    fn matches(&self, uri: &str) -> bool {
        RKD_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.artist_id(uri)
            .map(|id| {
                let artist = format!("<https://data.rkd.nl/artists/{id}>");
                // Birth and death places hang off the event's location via
                // P89_falls_within; the year is the span's begin boundary.
                let query = format!(
                    "PREFIX skos: <http://www.w3.org/2004/02/skos/core#> \
                     PREFIX crm: <http://www.cidoc-crm.org/cidoc-crm/> \
                     PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> \
                     PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#> \
                     PREFIX la: <https://linked.art/ns/terms/> \
                     SELECT ?birthPlace ?birthYear ?deathPlace ?deathYear ?link WHERE {{ \
                     OPTIONAL {{ \
                       {artist} crm:P98i_was_born/crm:P7_took_place_at/crm:P89_falls_within ?bornPlace . \
                       ?bornPlace skos:prefLabel ?birthPlace . \
                       FILTER (lang(?birthPlace) = 'nl') \
                     }} \
                     OPTIONAL {{ {artist} crm:P98i_was_born/crm:P4_has_time-span/crm:P82a_begin_of_the_begin ?birthYear . }} \
                     OPTIONAL {{ \
                       {artist} crm:P100i_died_in/crm:P7_took_place_at/crm:P89_falls_within ?diedPlace . \
                       ?diedPlace skos:prefLabel ?deathPlace . \
                       FILTER (lang(?deathPlace) = 'nl') \
                     }} \
                     OPTIONAL {{ {artist} crm:P100i_died_in/crm:P4_has_time-span/crm:P82a_begin_of_the_begin ?deathYear . }} \
                     {artist} crm:P129i_is_subject_of/la:access_point ?link . \
                     }}"
                );
                format!(
                    "https://api.rkd.triply.cc/datasets/rkd/RKD-Knowledge-Graph/services/SPARQL/sparql?query={}",
                    urlencoding::encode(&query)
                )
            })
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        let row = probe(&json).index(0);
        fields.insert_opt("Geboorteplaats", row.key("birthPlace").string());
        fields.insert_opt("Geboortejaar", row.key("birthYear").string());
        fields.insert_opt("Overlijdensplaats", row.key("deathPlace").string());
        fields.insert_opt("Overlijdensjaar", row.key("deathYear").string());
        if let Some(link) = row.key("link").string() {
            fields.insert_link("Hetzelfde als", link);
        }

        markup::attributed_definition_list("Een term uit", self.name(), uri, &fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod getty {
        use super::*;

        #[test]
        fn test_matches_all_three_schemes() {
            let r = GettyVocabularies;
            assert!(r.matches("http://vocab.getty.edu/aat/300198841"));
            assert!(r.matches("https://vocab.getty.edu/tgn/7016845"));
            assert!(r.matches("http://vocab.getty.edu/ulan/500115493"));
            assert!(!r.matches("http://vocab.getty.edu/cona/700000141"));
        }

        #[test]
        fn test_resource_url_embeds_encoded_query() {
            let url = GettyVocabularies.resource_url("http://vocab.getty.edu/aat/300198841");
            assert!(url.starts_with("http://vocab.getty.edu/sparql.json?query="));
            assert!(url.contains(urlencoding::encode("dc:identifier \"300198841\"").as_ref()));
            assert!(url.contains(urlencoding::encode("skos:inScheme aat:").as_ref()));
            // The raw query must not leak unencoded
            assert!(!url.contains(' '));
            assert!(!url.contains('"'));
        }

        #[test]
        fn test_render_standard_results_form() {
            let body = json!({"results": {"bindings": [{
                "Term": {"value": "tulip wood"},
                "ScopeNote": {"value": "Wood of any of several trees."}
            }]}})
            .to_string();

            let markup = GettyVocabularies.render("http://vocab.getty.edu/aat/300198841", &body);
            assert!(markup.contains("<dt>Term</dt><dd>tulip wood</dd>"));
            assert!(markup.contains("<dt>Scope note</dt><dd>Wood of any of several trees.</dd>"));
        }

        #[test]
        fn test_render_empty_bindings() {
            let body = json!({"results": {"bindings": []}}).to_string();
            assert_eq!(
                GettyVocabularies.render("http://vocab.getty.edu/aat/300198841", &body),
                "<dl></dl>"
            );
        }
    }

    mod rkd {
        use super::*;

        #[test]
        fn test_matches() {
            let r = RkdArtists;
            assert!(r.matches("https://data.rkd.nl/artists/32439"));
            assert!(!r.matches("https://data.rkd.nl/images/12345"));
        }

        #[test]
        fn test_resource_url_embeds_artist_uri() {
            let url = RkdArtists.resource_url("https://data.rkd.nl/artists/32439");
            assert!(url.starts_with(
                "https://api.rkd.triply.cc/datasets/rkd/RKD-Knowledge-Graph/services/SPARQL/sparql?query="
            ));
            assert!(url
                .contains(urlencoding::encode("<https://data.rkd.nl/artists/32439>").as_ref()));
        }

        #[test]
        fn test_query_walks_event_place_and_span_paths() {
            let url = RkdArtists.resource_url("https://data.rkd.nl/artists/32439");
            let encoded = |s: &str| urlencoding::encode(s).into_owned();
            assert!(url.contains(&encoded(
                "crm:P98i_was_born/crm:P7_took_place_at/crm:P89_falls_within"
            )));
            assert!(url.contains(&encoded(
                "crm:P100i_died_in/crm:P4_has_time-span/crm:P82a_begin_of_the_begin"
            )));
            assert!(url.contains(&encoded("crm:P129i_is_subject_of/la:access_point ?link")));
            assert!(url.contains(&encoded("FILTER (lang(?birthPlace) = 'nl')")));
            assert!(!url.contains(&encoded("LIMIT")));
        }

        #[test]
        fn test_render_simplified_results_form() {
            let body = json!([{
                "birthPlace": "Zundert",
                "birthYear": "1853",
                "deathPlace": "Auvers-sur-Oise",
                "deathYear": "1890",
                "link": "http://viaf.org/viaf/9854560"
            }])
            .to_string();

            let markup = RkdArtists.render("https://data.rkd.nl/artists/32439", &body);
            assert!(!markup.contains("<dt>Naam</dt>"));
            assert!(markup.contains("<dt>Geboorteplaats</dt><dd>Zundert</dd>"));
            assert!(markup.contains("<dt>Geboortejaar</dt><dd>1853</dd>"));
            assert!(markup.contains("<dt>Overlijdensplaats</dt><dd>Auvers-sur-Oise</dd>"));
            assert!(markup.contains("<dt>Overlijdensjaar</dt><dd>1890</dd>"));
            assert!(markup.contains(
                r#"<dt>Hetzelfde als</dt><dd><a href="http://viaf.org/viaf/9854560">http://viaf.org/viaf/9854560</a></dd>"#
            ));
            assert!(markup.contains(
                r#"<a target="uri-dereference" href="https://data.rkd.nl/artists/32439">RKDartists</a>"#
            ));
        }

        #[test]
        fn test_render_empty_results() {
            let markup = RkdArtists.render("https://data.rkd.nl/artists/32439", "[]");
            assert!(markup.ends_with("<dl></dl>"));
        }

        #[test]
        fn test_render_malformed_body() {
            let markup = RkdArtists.render("https://data.rkd.nl/artists/32439", "<html>");
            assert!(markup.ends_with("<dl></dl>"));
        }
    }
}
