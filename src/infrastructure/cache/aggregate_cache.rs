//! Session-wide cache for the aggregate character fetch.
//!
//! There is exactly one aggregate query in this system, so the cache holds a
//! single keyed slot with a populate-once, never-invalidate lifecycle:
//! `Unrequested → Loading → Ready | Failed`. Both terminal states persist for
//! the rest of the session; a failed fetch is re-attempted only by building a
//! fresh session (the page-reload analogue).

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::debug;

use crate::application::services::CatalogService;
use crate::domain::entities::AggregateResult;
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;

/// Observable lifecycle state of the cached aggregate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Unrequested,
    Loading,
    Ready,
    Failed,
}

enum Slot {
    Unrequested,
    Ready(Arc<AggregateResult>),
    Failed(AppError),
}

/// Single-flight cache wrapping [`CatalogService::get_all_characters`].
///
/// Concurrent consumers share one in-flight fetch and its eventual outcome:
/// the slot lock is held across the fetch, so at most one aggregate request
/// is in flight per session and late arrivals read the settled result.
pub struct AggregateCache<R: CharacterRepository + 'static> {
    service: Arc<CatalogService<R>>,
    slot: Mutex<Slot>,
    status: RwLock<CacheStatus>,
}

impl<R: CharacterRepository + 'static> AggregateCache<R> {
    pub fn new(service: Arc<CatalogService<R>>) -> Self {
        Self {
            service,
            slot: Mutex::new(Slot::Unrequested),
            status: RwLock::new(CacheStatus::Unrequested),
        }
    }

    /// Current lifecycle state, without blocking on an in-flight fetch.
    pub fn status(&self) -> CacheStatus {
        *self.status.read().expect("status lock poisoned")
    }

    /// Returns the aggregate, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns a clone of the terminal [`AppError`] once the fetch has
    /// failed; no automatic retry happens within the session.
    pub async fn get(&self) -> Result<Arc<AggregateResult>, AppError> {
        let mut slot = self.slot.lock().await;

        match &*slot {
            Slot::Ready(result) => return Ok(Arc::clone(result)),
            Slot::Failed(error) => return Err(error.clone()),
            Slot::Unrequested => {}
        }

        self.set_status(CacheStatus::Loading);
        debug!("aggregate cache miss, fetching");

        match self.service.get_all_characters().await {
            Ok(result) => {
                let result = Arc::new(result);
                *slot = Slot::Ready(Arc::clone(&result));
                self.set_status(CacheStatus::Ready);
                Ok(result)
            }
            Err(error) => {
                *slot = Slot::Failed(error.clone());
                self.set_status(CacheStatus::Failed);
                Err(error)
            }
        }
    }

    fn set_status(&self, status: CacheStatus) {
        *self.status.write().expect("status lock poisoned") = status;
    }
}
