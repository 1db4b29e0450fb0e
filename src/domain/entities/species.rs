//! Species entity used to label characters in the detail view.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entity_id::{EntityId, parse_entity_id};

/// A species record, keyed by its source URL.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: String,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan: String,
    /// Some species (droids) have no homeworld.
    pub homeworld: Option<String>,
    pub language: String,
    pub people: Vec<String>,
    pub films: Vec<String>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    pub url: String,
}

impl Species {
    pub fn id(&self) -> Option<EntityId> {
        parse_entity_id(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_decodes_with_null_homeworld() {
        let json = r#"{
            "name": "Droid",
            "classification": "artificial",
            "designation": "sentient",
            "average_height": "n/a",
            "skin_colors": "n/a",
            "hair_colors": "n/a",
            "eye_colors": "n/a",
            "average_lifespan": "indefinite",
            "homeworld": null,
            "language": "n/a",
            "people": ["https://swapi.dev/api/people/2/"],
            "films": ["https://swapi.dev/api/films/1/"],
            "created": "2014-12-10T15:16:16.259000Z",
            "edited": "2014-12-20T21:36:42.139000Z",
            "url": "https://swapi.dev/api/species/2/"
        }"#;

        let species: Species = serde_json::from_str(json).unwrap();
        assert_eq!(species.name, "Droid");
        assert_eq!(species.id(), Some(EntityId(2)));
        assert!(species.homeworld.is_none());
    }
}
