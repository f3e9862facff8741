//! Resolvers for authorities publishing RDF/XML documents.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Document;

use crate::access::xml::{joined_node_texts, node_text, node_text_lang, Namespaces};
use crate::config::PREFERRED_LANGUAGE;
use crate::fields::FieldSet;
use crate::markup;
use crate::resolver::{Resolver, ResolverOptions};

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";

// ---------------------------------------------------------------------------
// Geonames
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GEONAMES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Both the sws.geonames.org canonical form and www.geonames.org page
    // URLs with a trailing slug are accepted.
    Regex::new(r"^https?://[sw]w[sw]\.geonames\.org/(.+?)(?:/.+\.html)?$").expect("valid regex")
});

const GEONAMES_NS: Namespaces<'static> = &[
    ("gn", "http://www.geonames.org/ontology#"),
    ("wgs84_pos", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
];

/// Geonames (<https://www.geonames.org>).
pub struct Geonames;

impl Geonames {
    fn feature_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        GEONAMES_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Resolver for Geonames {
    fn name(&self) -> &str {
        "Geonames"
    }

    fn options(&self) -> ResolverOptions {
        ResolverOptions::proxied()
    }

    fn matches(&self, uri: &str) -> bool {
        GEONAMES_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.feature_id(uri)
            .map(|id| format!("http://www.geonames.org/{id}/about.rdf"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let mut fields = FieldSet::new();

        if let Ok(doc) = Document::parse(body) {
            fields.insert_opt("Name", node_text(&doc, "gn:Feature/gn:name", GEONAMES_NS));
            fields.insert_opt(
                "Official name",
                node_text_lang(
                    &doc,
                    "gn:Feature/gn:officialName",
                    GEONAMES_NS,
                    PREFERRED_LANGUAGE,
                ),
            );
            fields.insert_opt(
                "Latitude",
                node_text(&doc, "gn:Feature/wgs84_pos:lat", GEONAMES_NS),
            );
            fields.insert_opt(
                "Longitude",
                node_text(&doc, "gn:Feature/wgs84_pos:long", GEONAMES_NS),
            );
            fields.insert_opt(
                "Altitude",
                node_text(&doc, "gn:Feature/wgs84_pos:alt", GEONAMES_NS),
            );
        }

        markup::attributed_definition_list("Een term uit", self.name(), uri, &fields)
    }
}

// ---------------------------------------------------------------------------
// OCLC FAST
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FAST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://id\.worldcat\.org/fast/(.+)$").expect("valid regex"));

const FAST_NS: Namespaces<'static> = &[("rdf", RDF_NS), ("skos", SKOS_NS)];

/// OCLC FAST (Faceted Application of Subject Terminology,
/// <https://fast.oclc.org/fast/>).
pub struct OclcFast;

impl OclcFast {
    fn record_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        FAST_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Resolver for OclcFast {
    fn name(&self) -> &str {
        "OCLC FAST"
    }

    fn options(&self) -> ResolverOptions {
        ResolverOptions::proxied()
    }

    fn matches(&self, uri: &str) -> bool {
        FAST_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.record_id(uri)
            .map(|id| format!("http://id.worldcat.org/fast/{id}/rdf.xml"))
            .unwrap_or_default()
    }

    fn render(&self, _uri: &str, body: &str) -> String {
        let mut fields = FieldSet::new();

        if let Ok(doc) = Document::parse(body) {
            fields.insert_opt(
                "Pref label",
                joined_node_texts(&doc, "rdf:Description/skos:prefLabel", FAST_NS),
            );
            fields.insert_opt(
                "Alt label",
                joined_node_texts(&doc, "rdf:Description/skos:altLabel", FAST_NS),
            );
        }

        markup::definition_list(&fields)
    }
}

// ---------------------------------------------------------------------------
// Cultural Heritage Thesaurus (CHT)
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://data\.cultureelerfgoed\.nl/term/id/cht/(.+)$").expect("valid regex")
});

const CHT_NS: Namespaces<'static> = &[("rdf", RDF_NS), ("skos", SKOS_NS)];

/// Cultural Heritage Thesaurus van de Rijksdienst voor het Cultureel
/// Erfgoed (<https://data.cultureelerfgoed.nl>).
pub struct CulturalHeritageThesaurus;

impl CulturalHeritageThesaurus {
    fn term_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        CHT_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Resolver for CulturalHeritageThesaurus {
    fn name(&self) -> &str {
        "Cultural Heritage Thesaurus (CHT) van Rijksdienst voor het Cultureel Erfgoed (RCE)"
    }

    fn options(&self) -> ResolverOptions {
        ResolverOptions::proxied()
    }

    fn matches(&self, uri: &str) -> bool {
        CHT_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.term_id(uri)
            .map(|id| format!("https://data.cultureelerfgoed.nl/term/id/cht/{id}.rdf"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let mut fields = FieldSet::new();

        if let Ok(doc) = Document::parse(body) {
            fields.insert_opt(
                "Beschrijving",
                joined_node_texts(&doc, "rdf:Description/skos:scopeNote", CHT_NS),
            );
            fields.insert_opt(
                "Alternatieve labels",
                joined_node_texts(&doc, "rdf:Description/skos:altLabel", CHT_NS),
            );
        }

        markup::attributed_definition_list("Een term uit de", self.name(), uri, &fields)
    }
}
