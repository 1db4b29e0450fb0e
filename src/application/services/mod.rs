//! Application services orchestrating the domain layer.

mod catalog_service;

pub use catalog_service::{CatalogService, REMOTE_PAGE_SIZE};
