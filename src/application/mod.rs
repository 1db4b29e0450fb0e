//! Application layer: aggregation service plus the pure filter, pagination,
//! and session-state transformations consumed by the presentation layer.

pub mod filter;
pub mod pagination;
pub mod services;
pub mod session;
