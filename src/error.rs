// src/error.rs

//! Unified error handling for the translation dispatcher.

use std::fmt;

use thiserror::Error;

/// Result type alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// The first four variants abort an invocation. `Translate` and `Storage`
/// are raised by the collaborators and only cost a single language when
/// they happen inside the per-language loop.
#[derive(Error, Debug)]
pub enum AppError {
    /// Trigger event is missing `Records[0].s3.bucket.name` or `Records[0].s3.object.key`
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// Source object could not be fetched, decoded or parsed
    #[error("Failed to read source object {location}: {message}")]
    SourceRead { location: String, message: String },

    /// Source object is valid JSON but not a translation request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Required configuration value is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Translation service call failed
    #[error("Translation to '{target}' failed: {message}")]
    Translate { target: String, message: String },

    /// Object store call failed
    #[error("Storage error at {location}: {message}")]
    Storage { location: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Create a malformed event error.
    pub fn malformed_event(message: impl Into<String>) -> Self {
        Self::MalformedEvent(message.into())
    }

    /// Create a source read error for an object location.
    pub fn source_read(location: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::SourceRead {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a translation error for a target language.
    pub fn translate(target: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Translate {
            target: target.into(),
            message: message.to_string(),
        }
    }

    /// Create a storage error for an object location.
    pub fn storage(location: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Storage {
            location: location.into(),
            message: message.to_string(),
        }
    }
}

/// Format an object location the way the logs print it.
pub fn s3_uri(bucket: &str, key: &str) -> String {
    format!("s3://{}/{}", bucket, key)
}
