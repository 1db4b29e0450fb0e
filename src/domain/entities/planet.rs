//! Planet entity fetched for the homeworld detail view.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entity_id::{EntityId, parse_entity_id};
use crate::domain::measurement::Measurement;

/// A planet record, keyed by its source URL.
///
/// `population` carries the same `unknown` sentinel as character measurements
/// and is interpreted through [`Measurement`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    /// Back-references to resident characters.
    pub residents: Vec<String>,
    pub films: Vec<String>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    pub url: String,
}

impl Planet {
    pub fn id(&self) -> Option<EntityId> {
        parse_entity_id(&self.url)
    }

    pub fn population(&self) -> Measurement {
        Measurement::parse(&self.population)
    }
}
