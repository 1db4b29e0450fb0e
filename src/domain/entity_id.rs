//! Typed cross-entity identifiers.
//!
//! The remote source expresses every cross-entity reference as an opaque URL
//! whose trailing numeric path segment is the identifier
//! (`https://swapi.dev/api/planets/8/` → planet 8). Extraction lives here so
//! the "no recognizable id" edge case is a single code path instead of a
//! string-containment check duplicated per filter.

use std::fmt;

/// Numeric identifier embedded in a reference URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts the trailing numeric path segment from a reference URL.
///
/// Returns `None` when the reference has no recognizable numeric id; callers
/// treat such records as not matching the categorical filter in question
/// rather than failing.
pub fn parse_entity_id(reference: &str) -> Option<EntityId> {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u64>().ok())
        .map(EntityId)
}
