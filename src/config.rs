// src/config.rs

//! Environment configuration for the dispatcher.
//!
//! ## Environment Variables
//!
//! - `OUTPUT_BUCKET`: destination bucket for result files (required)
//! - `OUTPUT_PREFIX`: key prefix for result files (default: `output`)

use crate::error::{AppError, Result};

/// Environment variable naming the destination bucket.
pub const OUTPUT_BUCKET_VAR: &str = "OUTPUT_BUCKET";

/// Environment variable overriding the result key prefix.
pub const OUTPUT_PREFIX_VAR: &str = "OUTPUT_PREFIX";

/// Default result key prefix.
pub const DEFAULT_OUTPUT_PREFIX: &str = "output";

/// Settings the dispatcher needs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Destination bucket, if configured
    pub output_bucket: Option<String>,

    /// Prefix for result keys, without surrounding slashes
    pub output_prefix: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            output_bucket: None,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }
}

impl DispatcherConfig {
    /// Create a config with the given destination bucket and the default prefix.
    pub fn new(output_bucket: impl Into<String>) -> Self {
        Self {
            output_bucket: Some(output_bucket.into()),
            ..Default::default()
        }
    }

    /// Read configuration from the process environment.
    ///
    /// A missing bucket is not an error here; it surfaces when the
    /// dispatcher resolves the destination.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output_bucket = lookup(OUTPUT_BUCKET_VAR)
            .map(|bucket| bucket.trim().to_string())
            .filter(|bucket| !bucket.is_empty());

        let output_prefix = lookup(OUTPUT_PREFIX_VAR)
            .map(|prefix| prefix.trim().trim_matches('/').to_string())
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string());

        Self {
            output_bucket,
            output_prefix,
        }
    }

    /// Override the destination bucket.
    pub fn with_output_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.output_bucket = Some(bucket.into());
        self
    }

    /// Resolve the destination bucket, failing if it is not configured.
    pub fn destination_bucket(&self) -> Result<&str> {
        self.output_bucket.as_deref().ok_or_else(|| {
            AppError::configuration(format!("{} is not set", OUTPUT_BUCKET_VAR))
        })
    }
}
