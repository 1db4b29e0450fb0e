//! Session-wide query caching.

mod aggregate_cache;

pub use aggregate_cache::{AggregateCache, CacheStatus};
