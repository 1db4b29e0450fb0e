//! Reqwest-backed implementation of the character repository.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::domain::entities::{CharactersPage, Planet, Species};
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;

/// HTTP client for the remote character source.
///
/// Issues plain GET requests against a fixed base URL and decodes JSON
/// responses. No retries, no auth headers, no caching; the aggregate cache
/// above this layer is the only caching in the system.
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Builds the client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the underlying TLS backend cannot be
    /// initialized.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::remote_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::remote_status(url, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::remote_decode(url, e))
    }
}

#[async_trait]
impl CharacterRepository for SwapiClient {
    async fn get_character_page(&self, page: u32) -> Result<CharactersPage, AppError> {
        let url = format!("{}/people/?page={}", self.base_url, page);
        self.get_json(&url).await
    }

    async fn get_planet(&self, reference: &str) -> Result<Planet, AppError> {
        self.get_json(reference).await
    }

    async fn get_species(&self, reference: &str) -> Result<Species, AppError> {
        self.get_json(reference).await
    }
}
