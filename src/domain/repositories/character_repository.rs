//! Repository trait for remote character data access.

use crate::domain::entities::{CharactersPage, Planet, Species};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the remote character dataset.
///
/// The remote source serves the character list in fixed pages of 10 records;
/// planets and species are fetched through the opaque reference URLs embedded
/// in character records. No operation retries: the caller decides what a
/// failure means.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::SwapiClient`] - Reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Fetches one page of the character list.
    ///
    /// `page` is 1-based. The returned page carries `count`, the total number
    /// of records across all pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RemoteFetch`] on a non-success HTTP status or an
    /// undecodable response body.
    async fn get_character_page(&self, page: u32) -> Result<CharactersPage, AppError>;

    /// Fetches a planet through its reference URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RemoteFetch`] on a non-success HTTP status or an
    /// undecodable response body.
    async fn get_planet(&self, reference: &str) -> Result<Planet, AppError>;

    /// Fetches a species through its reference URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RemoteFetch`] on a non-success HTTP status or an
    /// undecodable response body.
    async fn get_species(&self, reference: &str) -> Result<Species, AppError>;
}
