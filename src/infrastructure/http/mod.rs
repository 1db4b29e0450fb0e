//! HTTP adapters for the remote character source.

mod swapi_client;

pub use swapi_client::SwapiClient;
