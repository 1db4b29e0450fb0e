//! Infrastructure layer: HTTP adapter and the aggregate query cache.

pub mod cache;
pub mod http;
