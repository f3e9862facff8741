//! Resolvers for authorities publishing plain JSON representations.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::access::json::{parse_or_null, probe};
use crate::config::PREFERRED_LANGUAGE;
use crate::fields::{FieldSet, FieldValue, Image};
use crate::markup;
use crate::resolver::{Resolver, ResolverOptions};

// ---------------------------------------------------------------------------
// Wikidata
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WIKIDATA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://www\.wikidata\.org/wiki/(Q.+)").expect("valid regex"));

/// Wikidata (<https://www.wikidata.org>).
pub struct Wikidata;

impl Wikidata {
    fn item_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        WIKIDATA_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Resolver for Wikidata {
    fn name(&self) -> &str {
        "Wikidata"
    }

    fn matches(&self, uri: &str) -> bool {
        WIKIDATA_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.item_id(uri)
            .map(|id| format!("https://www.wikidata.org/wiki/Special:EntityData/{id}.json"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        if let Some(id) = self.item_id(uri) {
            let entity = probe(&json).key("entities").key(id);
            fields.insert_opt(
                "Label",
                entity
                    .key("labels")
                    .key(PREFERRED_LANGUAGE)
                    .key("value")
                    .string(),
            );
            fields.insert_opt(
                "Description",
                entity
                    .key("descriptions")
                    .key(PREFERRED_LANGUAGE)
                    .key("value")
                    .string(),
            );
        }

        markup::definition_list(&fields)
    }
}

// ---------------------------------------------------------------------------
// OCLC VIAF
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VIAF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?viaf\.org/viaf/(.+?)/?(?:#.+)?$").expect("valid regex")
});

/// OCLC Virtual International Authority File (<https://viaf.org>).
///
/// Headings and activity fields are filtered to the Library of Congress
/// (LC) source.
pub struct OclcViaf;

impl OclcViaf {
    fn record_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        VIAF_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Whether a VIAF data entry lists the given source; `sources.s` is a
/// string for single-source entries and an array otherwise.
fn has_source(entry: &Value, source: &str) -> bool {
    match entry.get("sources").and_then(|s| s.get("s")) {
        Some(Value::String(s)) => s == source,
        Some(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some(source)),
        _ => false,
    }
}

/// VIAF wraps single-element collections as a bare object; normalize to a
/// slice either way.
fn as_entries(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(obj @ Value::Object(_)) => vec![obj],
        _ => Vec::new(),
    }
}

impl Resolver for OclcViaf {
    fn name(&self) -> &str {
        "OCLC VIAF"
    }

    fn options(&self) -> ResolverOptions {
        // Responses sent from OCLC VIAF lack an Access-Control-Allow-Origin
        // header.
        ResolverOptions::proxied()
    }

    fn matches(&self, uri: &str) -> bool {
        VIAF_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.record_id(uri)
            .map(|id| format!("https://viaf.org/viaf/{id}/viaf.json"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        let headings: Vec<String> =
            as_entries(probe(&json).key("mainHeadings").key("data").value())
                .into_iter()
                .filter(|entry| has_source(entry, "LC"))
                .filter_map(|entry| probe(entry).key("text").string())
                .collect();
        fields.insert_joined("Main headings", &headings);

        fields.insert_opt("Name type", probe(&json).key("nameType").string());

        for entry in as_entries(probe(&json).key("fieldOfActivity").key("data").value()) {
            if has_source(entry, "LC") {
                fields.insert_opt("Field of activity", probe(entry).key("text").string());
            }
        }

        let occupations: Vec<String> =
            as_entries(probe(&json).key("occupation").key("data").value())
                .into_iter()
                .filter(|entry| has_source(entry, "LC"))
                .filter_map(|entry| probe(entry).key("text").string())
                .collect();
        fields.insert_joined("Occupation", &occupations);

        fields.insert_opt("Birth date", probe(&json).key("birthDate").string());
        fields.insert_opt("Death date", probe(&json).key("deathDate").string());

        markup::attributed_definition_list(
            "Een term uit",
            "Virtual International Authority File (VIAF) van OCLC",
            uri,
            &fields,
        )
    }
}

// ---------------------------------------------------------------------------
// Gemeentegeschiedenis
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GEMEENTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://www\.gemeentegeschiedenis\.nl/gemeentenaam/(.*)").expect("valid regex")
});

/// Gemeentegeschiedenis, Dutch municipal history
/// (<https://www.gemeentegeschiedenis.nl>).
///
/// The JSON document has no fixed schema; every string-valued top-level key
/// becomes a row, except the geometry blob and the subject URI itself.
pub struct Gemeentegeschiedenis;

impl Gemeentegeschiedenis {
    fn municipality<'a>(&self, uri: &'a str) -> Option<&'a str> {
        GEMEENTE_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Resolver for Gemeentegeschiedenis {
    fn name(&self) -> &str {
        "Gemeentegeschiedenis"
    }

    fn matches(&self, uri: &str) -> bool {
        GEMEENTE_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        self.municipality(uri)
            .map(|name| format!("https://www.gemeentegeschiedenis.nl/gemeentenaam/json/{name}"))
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        if let Some(object) = json.as_object() {
            for (key, value) in object {
                if key == "geometries" || key == "uri" {
                    continue;
                }
                let Some(text) = value.as_str() else {
                    continue;
                };
                if text == "null" {
                    continue;
                }
                if text.starts_with("http") {
                    fields.insert_link(key, text);
                } else {
                    fields.insert_text(key, text);
                }
            }
        }

        markup::attributed_definition_list("Een term uit", self.name(), uri, &fields)
    }
}

// ---------------------------------------------------------------------------
// Het Biografisch Portaal
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BIOGRAFISCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://www\.biografischportaal\.nl/persoon/(.*)").expect("valid regex")
});

/// Het Biografisch Portaal van Nederland
/// (<http://www.biografischportaal.nl>).
pub struct BiografischPortaal;

impl BiografischPortaal {
    fn person_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        BIOGRAFISCH_PATTERN
            .captures(uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn event_label(event_type: &str) -> Option<&'static str> {
        match event_type {
            "birth" => Some("Geboren"),
            "baptism" => Some("Gedoopt"),
            "death" => Some("Overleden"),
            "funeral" => Some("Begraven"),
            _ => None,
        }
    }
}

impl Resolver for BiografischPortaal {
    fn name(&self) -> &str {
        "Het Biografisch Portaal"
    }

    fn matches(&self, uri: &str) -> bool {
        BIOGRAFISCH_PATTERN.is_match(uri)
    }

    fn resource_url(&self, uri: &str) -> String {
        // The portal has no CORS headers and no proxy-friendly endpoint;
        // the upstream relay is part of the canonical resource URL.
        self.person_id(uri)
            .map(|id| {
                format!(
                    "https://http2https.coret.org/http://www.biografischportaal.nl/persoon/json/{id}"
                )
            })
            .unwrap_or_default()
    }

    fn render(&self, uri: &str, body: &str) -> String {
        let json = parse_or_null(body);
        let mut fields = FieldSet::new();

        if let Some(events) = probe(&json).key("event").array() {
            for event in events {
                let Some(label) = probe(event)
                    .key("type")
                    .string()
                    .and_then(|t| Self::event_label(&t))
                else {
                    continue;
                };
                let Some(when) = probe(event).key("when").string() else {
                    continue;
                };
                let text = match probe(event).key("place").string() {
                    Some(place) => format!("{when} ({place})"),
                    None => when,
                };
                fields.insert_text(label, text);
            }
        }

        if let Some(figures) = probe(&json).key("figures").array() {
            let images: Vec<Image> = figures
                .iter()
                .filter_map(|figure| {
                    Some(Image {
                        src: probe(figure).key("url").string()?,
                        title: probe(figure).key("head").string().unwrap_or_default(),
                    })
                })
                .collect();
            if !images.is_empty() {
                fields.insert("Afbeelding(en)", FieldValue::Images(images));
            }
        }

        if let Some(biographies) = probe(&json).key("biographies").array() {
            let links: Vec<FieldValue> = biographies
                .iter()
                .filter_map(|bio| {
                    Some(FieldValue::Link {
                        href: probe(bio).key("url_biography").string()?,
                        text: probe(bio).key("publisher").string()?,
                    })
                })
                .collect();
            if !links.is_empty() {
                fields.insert("Biografie(ën)", FieldValue::List(links));
            }
        }

        markup::attributed_definition_list("Een term uit het", self.name(), uri, &fields)
    }
}
