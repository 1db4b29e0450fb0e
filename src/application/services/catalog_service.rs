//! Aggregation and detail-lookup service over the character repository.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{AggregateResult, Character, Planet, Species};
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;

/// Fixed page size of the remote source. Dictated externally; not
/// configurable by this crate.
pub const REMOTE_PAGE_SIZE: u64 = 10;

/// Service aggregating the remote character list and resolving per-character
/// detail lookups.
pub struct CatalogService<R: CharacterRepository> {
    repository: Arc<R>,
}

impl<R: CharacterRepository + 'static> CatalogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches every character across all remote pages.
    ///
    /// Page 1 is fetched first to learn the total count; the remaining pages
    /// are requested concurrently and joined in ascending page order, so the
    /// result order is deterministic regardless of network completion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Aggregation`] wrapping the lowest-numbered failing
    /// page if any request fails. Partial results are discarded, never
    /// returned.
    pub async fn get_all_characters(&self) -> Result<AggregateResult, AppError> {
        let first = self
            .repository
            .get_character_page(1)
            .await
            .map_err(|e| AppError::aggregation(1, e))?;

        let count = first.count;
        let total_pages = count.div_ceil(REMOTE_PAGE_SIZE) as u32;
        debug!(count, total_pages, "aggregate fetch started");

        let mut results = first.results;

        if total_pages > 1 {
            let mut handles = Vec::with_capacity((total_pages - 1) as usize);
            for page in 2..=total_pages {
                let repository = Arc::clone(&self.repository);
                handles.push((
                    page,
                    tokio::spawn(async move { repository.get_character_page(page).await }),
                ));
            }

            // Await in ascending page order. The barrier is all-or-nothing:
            // every task is awaited even after a failure, but only the first
            // (lowest-page) failure is kept and no partial data escapes.
            let mut failure: Option<AppError> = None;
            for (page, handle) in handles {
                match handle.await {
                    Ok(Ok(page_data)) => {
                        if failure.is_none() {
                            results.extend(page_data.results);
                        }
                    }
                    Ok(Err(e)) => {
                        if failure.is_none() {
                            failure = Some(AppError::aggregation(page, e));
                        }
                    }
                    Err(join_err) => {
                        if failure.is_none() {
                            failure = Some(AppError::internal(format!(
                                "page {page} fetch task failed: {join_err}"
                            )));
                        }
                    }
                }
            }

            if let Some(e) = failure {
                return Err(e);
            }
        }

        if results.len() as u64 != count {
            warn!(
                expected = count,
                actual = results.len(),
                "remote count disagrees with aggregated length"
            );
        }

        info!(count, total_pages, "aggregate fetch complete");
        Ok(AggregateResult::new(count, results))
    }

    /// Fetches the homeworld planet for a character's detail view.
    ///
    /// Failures here are independent of the character list and never poison
    /// the aggregate.
    pub async fn get_homeworld(&self, character: &Character) -> Result<Planet, AppError> {
        self.repository.get_planet(&character.homeworld).await
    }

    /// Resolves the character's species, if the record carries one.
    ///
    /// The source leaves the species list empty for baseline humans, so
    /// `Ok(None)` means "no explicit species record", not an error.
    pub async fn get_species(&self, character: &Character) -> Result<Option<Species>, AppError> {
        match character.species.first() {
            None => Ok(None),
            Some(reference) => self.repository.get_species(reference).await.map(Some),
        }
    }
}
