//! Character entity and the paged list shape returned by the remote source.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entity_id::{EntityId, parse_entity_id};

/// A character record as served by the remote source.
///
/// Identity is the canonical `url`. Measurement fields (`height`, `mass`)
/// stay opaque strings on the wire because the source uses the literal token
/// `unknown` for missing values; [`crate::domain::measurement::Measurement`]
/// interprets them at the presentation boundary.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    /// Reference URL of the character's homeworld planet.
    pub homeworld: String,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    pub url: String,
}

impl Character {
    /// The character's own numeric id, extracted from its canonical URL.
    pub fn id(&self) -> Option<EntityId> {
        parse_entity_id(&self.url)
    }

    /// The numeric id of the homeworld reference, if recognizable.
    pub fn homeworld_id(&self) -> Option<EntityId> {
        parse_entity_id(&self.homeworld)
    }

    /// Returns true if any species reference resolves to `id`.
    pub fn has_species(&self, id: EntityId) -> bool {
        self.species
            .iter()
            .any(|reference| parse_entity_id(reference) == Some(id))
    }

    /// Returns true if any film reference resolves to `id`.
    pub fn appears_in_film(&self, id: EntityId) -> bool {
        self.films
            .iter()
            .any(|reference| parse_entity_id(reference) == Some(id))
    }
}

/// One page of the character list: total count across all pages plus this
/// page's records in source order.
#[derive(Debug, Clone, Deserialize)]
pub struct CharactersPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Character>,
}

/// The fully aggregated character list.
///
/// Invariant: `results.len() == count` once aggregation completes; partial
/// results are never exposed (aggregation is all-or-nothing).
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub count: u64,
    pub results: Vec<Character>,
}

impl AggregateResult {
    pub fn new(count: u64, results: Vec<Character>) -> Self {
        Self { count, results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
