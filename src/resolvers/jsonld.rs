//! Resolvers for authorities publishing JSON-LD graphs (or JSON documents
//! keyed by canonical resource URI, as DBpedia does).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::access::json::{parse_or_null, probe};
use crate::access::jsonld::{first_literal, literals, node_by_id, node_by_id_containing};
use crate::config::PREFERRED_LANGUAGE;
use crate::fields::{FieldSet, FieldValue};
use crate::markup;
use crate::resolver::Resolver;

// ---------------------------------------------------------------------------
// LC Linked Data Service (id.loc.gov)
// ---------------------------------------------------------------------------

/// Dataset path segments under `/authorities/`.
const LC_AUTHORITIES: &[&str] = &[
    // Subjects, Thesauri, Classification
    "subjects",
    "classification",
    "childrensSubjects",
    "performanceMediums",
    // Agents
    "names",
    // Genre
    "genreForms",
    // Cataloging
    "demographicTerms",
];

/// Dataset path segments under `/vocabulary/`.
const LC_VOCABULARIES: &[&str] = &[
    // Subjects, Thesauri, Classification
    "graphicMaterials",
    "ethnographicTerms",
    "subjectSchemes",
    "classSchemes",
    // Agents
    "organizations",
    // Genre
    "marcgt",
    "genreFormSchemes",
    // Languages
    "languages",
    "iso639-1",
    "iso639-2",
    "iso639-5",
    // Geographic
    "countries",
    "geographicAreas",
    // Cataloging
    "maspect",
    "marcauthen",
    "mbroadstd",
    "carriers",
    "mcolor",
    "contentTypes",
    "descriptionConventions",
    "mcapturestorage",
    "menclvl",
    "mfont",
    "mfiletype",
    "mgeneration",
    "mgroove",
    "mstatus",
    "millus",
    "maudience",
    "issuance",
    "mlayout",
    "mediaTypes",
    "mmusnotation",
    "mmusicformat",
    "mplayback",
    "mplayspeed",
    "mpolarity",
    "mpresformat",
    "mproduction",
    "mprojection",
    "frequencies",
    "mrecmedium",
    "mrectype",
    "mreductionratio",
    "mregencoding",
    "relators",
    "mrelief",
    "resourceComponents",
    "mscale",
    "mscript",
    "msoundcontent",
    "mspecplayback",
    "msupplcont",
    "mmaterial",
    "mtactile",
    "mtapeconfig",
    "mtechnique",
    "mvidformat",
    // Preservation vocabularies hang off one shared segment
    "preservation",
];

/// Dataset path segments under `/resources/`.
const LC_RESOURCES: &[&str] = &["works", "instances", "items"];

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let datasets: Vec<&str> = LC_AUTHORITIES
        .iter()
        .chain(LC_VOCABULARIES)
        .chain(LC_RESOURCES)
        .copied()
        .collect();
    Regex::new(&format!(
        r"^https?://id\.loc\.gov/(authorities|vocabulary|resources)/({})/(.+?)(\.html)?$",
        datasets.join("|")
    ))
    .expect("valid regex")
});

const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
const SKOS_NOTE: &str = "http://www.w3.org/2004/02/skos/core#note";
const SKOSXL_ALT_LABEL: &str = "http://www.w3.org/2008/05/skos-xl#altLabel";

/// Library of Congress Linked Data Service (<http://id.loc.gov>).
pub struct LcLinkedData;

impl LcLinkedData {
    fn capture<'a>(&self, uri: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
        let caps = LC_PATTERN.captures(uri)?;
        Some((
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
        ))
    }
}

impl Resolver for LcLinkedData {
    fn name(&self) -> &str {
        "LC Linked Data Service"
    }

    fn matches(&self, uri: &str) -> bool {
        LC_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.capture(uri)
            .map(|(section, dataset, id)| format!("http://id.loc.gov/{section}/{dataset}/{id}.json"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        // The relevant node is indexed by the URI set on its @id; a trailing
        // .html on the subject URI is not part of the identifier.
        let canonical = uri.strip_suffix(".html").unwrap_or(uri);
        if let Some(node) = node_by_id(&json, canonical) {
            fields.insert_opt("Label", first_literal(node, RDFS_LABEL));
            fields.insert_opt("Pref label", first_literal(node, SKOS_PREF_LABEL));
            fields.insert_joined("Alt Label", &literals(node, SKOSXL_ALT_LABEL));
            fields.insert_opt("Definition", first_literal(node, SKOS_DEFINITION));
            fields.insert_opt("Note", first_literal(node, SKOS_NOTE));
        }

        markup::definition_list(&fields)
    }
}

// ---------------------------------------------------------------------------
// DBpedia
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DBPEDIA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://dbpedia\.org/page/(.+)$").expect("valid regex"));

/// DBpedia (<https://www.dbpedia.org>).
///
/// Category pages are not supported.
pub struct Dbpedia;

impl Dbpedia {
    fn resource_name<'a>(&self, uri: &'a str) -> Option<&'a str> {
        DBPEDIA_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| !name.starts_with("Category:"))
    }

    /// Value of the entry tagged with the preferred language.
    fn english_value(values: &Value) -> Option<String> {
        values.as_array()?.iter().find_map(|entry| {
            if probe(entry).key("lang").string().as_deref() == Some(PREFERRED_LANGUAGE) {
                probe(entry).key("value").string()
            } else {
                None
            }
        })
    }
}

impl Resolver for Dbpedia {
    fn name(&self) -> &str {
        "DBpedia"
    }

    fn matches(&self, uri: &str) -> bool {
        self.resource_name(uri).is_some()
    }

    fn resource_url(&self, uri: &str) -> String {
        self.resource_name(uri)
            .map(|name| format!("http://dbpedia.org/data/{name}.json"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        if let Some(name) = self.resource_name(uri) {
            let subject = format!("http://dbpedia.org/resource/{name}");
            let node = probe(&json).key(&subject);
            if let Some(labels) = node.key(RDFS_LABEL).value() {
                fields.insert_opt("Label", Self::english_value(labels));
            }
            if let Some(comments) = node
                .key("http://www.w3.org/2000/01/rdf-schema#comment")
                .value()
            {
                fields.insert_opt("Comment", Self::english_value(comments));
            }
        }

        markup::definition_list(&fields)
    }
}

// ---------------------------------------------------------------------------
// RDA Value Vocabularies
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static RDA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?rdaregistry\.info/termList/(.+)/#?(.+)$").expect("valid regex")
});

/// RDA Value Vocabularies (<https://www.rdaregistry.info/termList/>).
///
/// The resource URL is a graph of every concept in the term list; the
/// matched concept is selected by its canonical identifier.
pub struct RdaValueVocabularies;

impl RdaValueVocabularies {
    fn capture<'a>(&self, uri: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = RDA_PATTERN.captures(uri)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

impl Resolver for RdaValueVocabularies {
    fn name(&self) -> &str {
        "RDA Value Vocabularies"
    }

    fn matches(&self, uri: &str) -> bool {
        RDA_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.capture(uri)
            .map(|(list, _)| format!("http://rdaregistry.info/termList/{list}.jsonld"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        if let Some((list, code)) = self.capture(uri) {
            let canonical = format!("http://rdaregistry.info/termList/{list}/{code}");
            if let Some(concept) = node_by_id(&json, &canonical) {
                fields.insert_opt(
                    "Pref label",
                    probe(concept).key("prefLabel").key(PREFERRED_LANGUAGE).string(),
                );
                fields.insert_opt(
                    "Alt label",
                    probe(concept).key("altLabel").key(PREFERRED_LANGUAGE).string(),
                );
                fields.insert_opt(
                    "Definition",
                    probe(concept).key("definition").key(PREFERRED_LANGUAGE).string(),
                );
            }
        }

        markup::definition_list(&fields)
    }
}

// ---------------------------------------------------------------------------
// Nederlandse Thesaurus van Auteursnamen (NTA)
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NTA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://data\.bibliotheken\.nl/id/thes/(.*)").expect("valid regex")
});

/// Nederlandse Thesaurus van Auteursnamen
/// (<http://data.bibliotheken.nl/doc/dataset/persons>).
///
/// The thesaurus node has no fixed property set; every non-`@` property of
/// the matched graph node becomes a row.
pub struct AuteursnamenThesaurus;

impl AuteursnamenThesaurus {
    fn record_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        NTA_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn item_value(item: &Value) -> Option<FieldValue> {
        if let Some(id) = probe(item).key("@id").string() {
            // Blank nodes carry no dereferenceable identity
            if id.starts_with("_:") {
                return None;
            }
            return Some(FieldValue::link(id));
        }
        if let Some(value) = probe(item).key("@value").string() {
            let text = match probe(item).key("@language").string() {
                Some(lang) => format!("{value} ({lang})"),
                None => value,
            };
            return Some(FieldValue::Text(text));
        }
        let text = probe(item).string()?;
        if text.starts_with("_:") {
            return None;
        }
        if text.starts_with("http") {
            Some(FieldValue::link(text))
        } else {
            Some(FieldValue::Text(text))
        }
    }
}

impl Resolver for AuteursnamenThesaurus {
    fn name(&self) -> &str {
        "Nederlandse Thesaurus van Auteursnamen (NTA)"
    }

    fn matches(&self, uri: &str) -> bool {
        NTA_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.record_id(uri)
            .map(|id| format!("https://data.bibliotheken.nl/doc/thes/{id}.json"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        let node = node_by_id_containing(&json, "id/thes/").and_then(Value::as_object);
        if let Some(node) = node {
            for (key, value) in node {
                if key.starts_with('@') {
                    continue;
                }
                match value {
                    Value::Array(items) => {
                        let rendered: Vec<FieldValue> =
                            items.iter().filter_map(Self::item_value).collect();
                        if !rendered.is_empty() {
                            fields.insert(key, FieldValue::List(rendered));
                        }
                    }
                    other => {
                        if let Some(rendered) = Self::item_value(other) {
                            fields.insert(key, rendered);
                        }
                    }
                }
            }
        }

        markup::attributed_definition_list("Een term uit de", self.name(), uri, &fields)
    }
}

// ---------------------------------------------------------------------------
// Nederlandse Bibliografie Totaal (NBT)
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NBT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://data\.bibliotheken\.nl/id/nbt/(.*)").expect("valid regex")
});

/// Nederlandse Bibliografie Totaal van de KB, nationale bibliotheek
/// (<https://data.bibliotheken.nl>).
pub struct BibliografieTotaal;

impl BibliografieTotaal {
    fn record_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        NBT_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Resolver for BibliografieTotaal {
    fn name(&self) -> &str {
        "Nederlandse Bibliografie Totaal (NBT) van de KB, nationale bibliotheek"
    }

    fn matches(&self, uri: &str) -> bool {
        NBT_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.record_id(uri)
            .map(|id| format!("https://data.bibliotheken.nl/doc/nbt/{id}.json"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        if let Some(node) = node_by_id_containing(&json, "id/nbt/") {
            fields.insert_opt("Label", probe(node).key("label").string());
            fields.insert_opt("Beschrijving", probe(node).key("description").string());
            let same_as = probe(node)
                .key("sameAs")
                .string()
                .or_else(|| probe(node).key("schema:sameAs").string());
            if let Some(same_as) = same_as {
                fields.insert_link("Zelfde als", same_as);
            }
        }

        markup::attributed_definition_list("Een term uit de", self.name(), uri, &fields)
    }
}
