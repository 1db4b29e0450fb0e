//! Error types shared across the catalog pipeline.
//!
//! The taxonomy mirrors the data flow: a single failing request surfaces as
//! [`AppError::RemoteFetch`]; when it happens inside a multi-page aggregate
//! fetch it is wrapped in [`AppError::Aggregation`] and the partial result is
//! discarded. There is no retry at any level; every error is terminal for the
//! operation that produced it.

use thiserror::Error;

/// Application error taxonomy.
///
/// Cloneable so the session-wide aggregate cache can hand the same terminal
/// failure to every consumer.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// The remote source returned a non-success status or an undecodable body.
    #[error("remote fetch failed for {url}: {reason}")]
    RemoteFetch {
        url: String,
        /// HTTP status code, when the failure happened after a response arrived.
        status: Option<u16>,
        reason: String,
    },

    /// A page of a multi-page aggregate fetch failed.
    #[error("aggregation failed at page {page}: {source}")]
    Aggregation {
        page: u32,
        #[source]
        source: Box<AppError>,
    },

    /// Unexpected runtime failure (e.g. a panicked background task).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Transport-level failure before any response arrived.
    pub fn remote_transport(url: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::RemoteFetch {
            url: url.into(),
            status: None,
            reason: source.to_string(),
        }
    }

    /// Non-success HTTP status from the remote source.
    pub fn remote_status(url: impl Into<String>, status: u16) -> Self {
        Self::RemoteFetch {
            url: url.into(),
            status: Some(status),
            reason: format!("unexpected status {status}"),
        }
    }

    /// The response body could not be decoded into the expected shape.
    pub fn remote_decode(url: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::RemoteFetch {
            url: url.into(),
            status: None,
            reason: format!("failed to decode response body: {source}"),
        }
    }

    /// Wraps the first page failure of an aggregate fetch.
    pub fn aggregation(page: u32, source: AppError) -> Self {
        Self::Aggregation {
            page,
            source: Box::new(source),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error (or its aggregation cause) is a remote fetch failure.
    pub fn is_remote_fetch(&self) -> bool {
        match self {
            Self::RemoteFetch { .. } => true,
            Self::Aggregation { source, .. } => source.is_remote_fetch(),
            _ => false,
        }
    }
}
