//! Shared application state wiring the service and cache layers.

use std::sync::Arc;

use crate::application::services::CatalogService;
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::cache::AggregateCache;
use crate::infrastructure::http::SwapiClient;

/// Wired pipeline for one session: HTTP client → catalog service → aggregate
/// cache. The cache (and the aggregate it owns) lives for the lifetime of
/// this state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService<SwapiClient>>,
    pub cache: Arc<AggregateCache<SwapiClient>>,
}

impl AppState {
    /// Builds the full pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Arc::new(SwapiClient::new(config)?);
        let catalog = Arc::new(CatalogService::new(client));
        let cache = Arc::new(AggregateCache::new(Arc::clone(&catalog)));

        Ok(Self { catalog, cache })
    }
}
