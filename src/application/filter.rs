//! Pure search and categorical filtering over the aggregated character list.
//!
//! All predicates are ANDed and the filter is stable: the output is always an
//! order-preserving subsequence of the input. Applying the same
//! [`FilterState`] twice yields the same result.

use std::fmt;

use clap::ValueEnum;

use crate::domain::entities::Character;
use crate::domain::entity_id::EntityId;

/// Species selector. `Human` additionally matches records with an empty
/// species list, matching how the source models baseline humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SpeciesFilter {
    #[default]
    All,
    Human,
    Droid,
    Wookiee,
}

impl SpeciesFilter {
    /// The species id this selector maps to, `None` for `All`.
    pub fn species_id(self) -> Option<EntityId> {
        match self {
            Self::All => None,
            Self::Human => Some(EntityId(1)),
            Self::Droid => Some(EntityId(2)),
            Self::Wookiee => Some(EntityId(3)),
        }
    }
}

impl fmt::Display for SpeciesFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Human => "human",
            Self::Droid => "droid",
            Self::Wookiee => "wookiee",
        };
        f.write_str(name)
    }
}

/// Homeworld selector, mapping named planets to their fixed source ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HomeworldFilter {
    #[default]
    All,
    Tatooine,
    Alderaan,
    Naboo,
}

impl HomeworldFilter {
    /// The planet id this selector maps to, `None` for `All`.
    pub fn planet_id(self) -> Option<EntityId> {
        match self {
            Self::All => None,
            Self::Tatooine => Some(EntityId(1)),
            Self::Alderaan => Some(EntityId(2)),
            Self::Naboo => Some(EntityId(8)),
        }
    }
}

impl fmt::Display for HomeworldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Tatooine => "tatooine",
            Self::Alderaan => "alderaan",
            Self::Naboo => "naboo",
        };
        f.write_str(name)
    }
}

/// Film selector. `Episode` matches when the record's film list contains a
/// reference to that film id; an id absent from every record matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilmFilter {
    #[default]
    All,
    Episode(u64),
}

/// Independent, mutually orthogonal categorical selectors.
///
/// Created with all-defaults at session start, mutated only by explicit user
/// input, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub species: SpeciesFilter,
    pub homeworld: HomeworldFilter,
    pub film: FilmFilter,
}

/// Applies the search predicate and all categorical filters, ANDed.
///
/// - Search: case-insensitive substring match of the trimmed query against
///   each record's name; empty or whitespace-only queries match everything.
/// - Categorical predicates resolve cross-entity ids through
///   [`crate::domain::entity_id::parse_entity_id`]; a reference with no
///   recognizable id does not match (and never errors).
pub fn apply_filters<'a>(
    records: &'a [Character],
    search: &str,
    filters: &FilterState,
) -> Vec<&'a Character> {
    let query = search.trim().to_lowercase();

    records
        .iter()
        .filter(|c| matches_search(c, &query))
        .filter(|c| matches_species(c, filters.species))
        .filter(|c| matches_homeworld(c, filters.homeworld))
        .filter(|c| matches_film(c, filters.film))
        .collect()
}

fn matches_search(character: &Character, query: &str) -> bool {
    query.is_empty() || character.name.to_lowercase().contains(query)
}

fn matches_species(character: &Character, filter: SpeciesFilter) -> bool {
    match filter {
        SpeciesFilter::All => true,
        // The source leaves the species list empty for baseline humans.
        SpeciesFilter::Human => {
            character.species.is_empty() || character.has_species(EntityId(1))
        }
        other => other
            .species_id()
            .is_some_and(|id| character.has_species(id)),
    }
}

fn matches_homeworld(character: &Character, filter: HomeworldFilter) -> bool {
    match filter.planet_id() {
        None => true,
        Some(id) => character.homeworld_id() == Some(id),
    }
}

fn matches_film(character: &Character, filter: FilmFilter) -> bool {
    match filter {
        FilmFilter::All => true,
        FilmFilter::Episode(n) => character.appears_in_film(EntityId(n)),
    }
}
