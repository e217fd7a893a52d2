//! Error types for proxy-list-updater
//!
//! This module provides the error handling for the library:
//! - A top-level [`Error`] covering configuration, transport and persistence failures
//! - Domain-specific sub-errors ([`FetchError`], [`PersistError`]) carrying the URL or path involved
//! - [`Error::stage`] so callers can tell which step of a target update failed

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::types::Stage;

/// Result type alias for proxy-list-updater operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for proxy-list-updater
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "targets[0].filename")
        key: Option<String>,
    },

    /// Fetching a remote list failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing or reading a local file failed
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be constructed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error (config file, JSON event output)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// The target update stage this error belongs to, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Fetch(_) | Error::Network(_) => Some(Stage::Fetch),
            Error::Persist(_) | Error::Io(_) => Some(Stage::Persist),
            Error::Config { .. } | Error::Serialization(_) => None,
        }
    }
}

/// Transport errors raised while retrieving a remote list
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("timed out fetching {url} after {timeout:?}")]
    Timeout {
        /// The URL being fetched
        url: String,
        /// The timeout that was exceeded
        timeout: Duration,
    },

    /// The connection could not be established (refused, DNS failure, ...)
    #[error("connection failed for {url}: {reason}")]
    Connect {
        /// The URL being fetched
        url: String,
        /// Underlying client error text
        reason: String,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} fetching {url}")]
    Status {
        /// The URL being fetched
        url: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// Any other request failure
    #[error("request to {url} failed: {reason}")]
    Request {
        /// The URL being fetched
        url: String,
        /// Underlying client error text
        reason: String,
    },

    /// The response body could not be read
    #[error("failed to read response body from {url}: {reason}")]
    Body {
        /// The URL being fetched
        url: String,
        /// Underlying client error text
        reason: String,
    },
}

/// Filesystem errors raised while persisting lists or the report
#[derive(Debug, Error)]
pub enum PersistError {
    /// Writing (create or truncate) a file failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading back a persisted file failed
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
