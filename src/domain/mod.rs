//! Domain layer: entities, typed identifiers, and repository contracts.

pub mod entities;
pub mod entity_id;
pub mod measurement;
pub mod repositories;
