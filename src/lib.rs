//! # swapi-catalog
//!
//! A browse-and-filter catalog over the galactic character dataset served by
//! a public read-only REST API.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, typed cross-entity ids, the
//!   `unknown` measurement sentinel, and the repository trait
//! - **Application Layer** ([`application`]) - The aggregation service plus
//!   pure filter, pagination, and browse-session transformations
//! - **Infrastructure Layer** ([`infrastructure`]) - Reqwest client and the
//!   session-wide single-flight aggregate cache
//! - **CLI Layer** ([`cli`]) - Terminal card grid, detail view, and the
//!   interactive browse loop
//!
//! Data flows one way: client → aggregator → cache → filter → paginator →
//! presentation. User input (search text, filter selection, page number)
//! flows back into the pure transformations, which are recomputed on every
//! change; the network fetch happens once per session.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at a different API deployment
//! export SWAPI_BASE_URL="https://swapi.dev/api"
//!
//! # One-shot listing
//! cargo run -- list --search luke --species human --page 1
//!
//! # Interactive browsing
//! cargo run -- browse
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for available options.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::filter::{
        FilmFilter, FilterState, HomeworldFilter, SpeciesFilter, apply_filters,
    };
    pub use crate::application::pagination::{PAGE_SIZE, Page, paginate};
    pub use crate::application::services::{CatalogService, REMOTE_PAGE_SIZE};
    pub use crate::application::session::BrowseSession;
    pub use crate::domain::entities::{AggregateResult, Character, CharactersPage, Planet, Species};
    pub use crate::domain::entity_id::{EntityId, parse_entity_id};
    pub use crate::domain::measurement::Measurement;
    pub use crate::domain::repositories::CharacterRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{AggregateCache, CacheStatus};
    pub use crate::infrastructure::http::SwapiClient;
    pub use crate::state::AppState;
}
