//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is issued.
//!
//! ## Variables
//!
//! - `SWAPI_BASE_URL` - Remote API base URL (default: `https://swapi.dev/api`)
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout (default: 30)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use url::Url;

/// Default remote API base URL.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub http_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var("SWAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            http_timeout_seconds,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `SWAPI_BASE_URL` is not an absolute http(s) URL
    /// - `HTTP_TIMEOUT_SECONDS` is zero or over 300
    /// - `LOG_FORMAT` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("SWAPI_BASE_URL is not a valid URL: {e}"))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "SWAPI_BASE_URL must use http or https, got '{}'",
                parsed.scheme()
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout_seconds: 30,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = base_config();

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://example.test/api".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8080/api".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = base_config();

        config.http_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.http_timeout_seconds = 301;
        assert!(config.validate().is_err());

        config.http_timeout_seconds = 300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_format() {
        let mut config = base_config();

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("SWAPI_BASE_URL");
            env::remove_var("HTTP_TIMEOUT_SECONDS");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http_timeout_seconds, 30);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SWAPI_BASE_URL", "http://localhost:9000/api");
            env::set_var("HTTP_TIMEOUT_SECONDS", "10");
        }

        let config = Config::from_env();
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.http_timeout_seconds, 10);

        // Cleanup
        unsafe {
            env::remove_var("SWAPI_BASE_URL");
            env::remove_var("HTTP_TIMEOUT_SECONDS");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_timeout_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("HTTP_TIMEOUT_SECONDS", "soon");
        }

        let config = Config::from_env();
        assert_eq!(config.http_timeout_seconds, 30);

        unsafe {
            env::remove_var("HTTP_TIMEOUT_SECONDS");
        }
    }
}
