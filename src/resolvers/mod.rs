//! Built-in authority resolvers, grouped by the format family their
//! machine-readable documents use.

pub mod json;
pub mod jsonld;
pub mod sparql;
pub mod xml;

pub use json::{BiografischPortaal, Gemeentegeschiedenis, OclcViaf, Wikidata};
pub use jsonld::{AuteursnamenThesaurus, BibliografieTotaal, Dbpedia, LcLinkedData, RdaValueVocabularies};
pub use sparql::{GettyVocabularies, RkdArtists};
pub use xml::{CulturalHeritageThesaurus, Geonames, OclcFast};

use crate::registry::ResolverRegistry;

/// Registry with every built-in resolver registered.
///
/// Registration order is dispatch order. The two data.bibliotheken.nl
/// resolvers use disjoint path prefixes, so within this set order only
/// matters for determinism, not correctness.
#[must_use]
pub fn default_registry() -> ResolverRegistry {
    let mut registry = ResolverRegistry::new();
    registry.register(Wikidata);
    registry.register(LcLinkedData);
    registry.register(Dbpedia);
    registry.register(GettyVocabularies);
    registry.register(Geonames);
    registry.register(OclcViaf);
    registry.register(OclcFast);
    registry.register(RdaValueVocabularies);
    registry.register(Gemeentegeschiedenis);
    registry.register(AuteursnamenThesaurus);
    registry.register(BiografischPortaal);
    registry.register(BibliografieTotaal);
    registry.register(CulturalHeritageThesaurus);
    registry.register(RkdArtists);
    registry
}
