// src/pipeline/report.rs

//! Per-language outcome accounting and the invocation result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::SourceObject;

/// Stage at which a single language failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Translate,
    Write,
}

/// What happened to one target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LanguageOutcome {
    /// Result object stored at `key` in the destination bucket
    Written { key: String },
    /// No result object was stored
    Failed { stage: FailureStage, message: String },
}

/// Outcome for one entry of `TargetLanguageCodes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageReport {
    pub target_language: String,
    #[serde(flatten)]
    pub outcome: LanguageOutcome,
}

/// Summary of one completed invocation.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    /// Object that triggered the invocation
    pub source: SourceObject,

    /// Bucket the results were written to
    pub destination_bucket: String,

    /// Outcomes in request order, one per requested language
    pub languages: Vec<LanguageReport>,
}

impl DispatchReport {
    pub fn new(source: SourceObject, destination_bucket: impl Into<String>) -> Self {
        Self {
            source,
            destination_bucket: destination_bucket.into(),
            languages: Vec::new(),
        }
    }

    pub fn record(&mut self, target_language: impl Into<String>, outcome: LanguageOutcome) {
        self.languages.push(LanguageReport {
            target_language: target_language.into(),
            outcome,
        });
    }

    /// Number of languages attempted, successful or not.
    pub fn attempted(&self) -> usize {
        self.languages.len()
    }

    /// Keys written, in request order.
    pub fn written_keys(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter_map(|l| match &l.outcome {
                LanguageOutcome::Written { key } => Some(key.as_str()),
                LanguageOutcome::Failed { .. } => None,
            })
            .collect()
    }

    /// Languages that produced no result object.
    pub fn failures(&self) -> Vec<&LanguageReport> {
        self.languages
            .iter()
            .filter(|l| matches!(l.outcome, LanguageOutcome::Failed { .. }))
            .collect()
    }

    /// Human-readable completion message.
    ///
    /// Counts requested languages, including the ones that failed.
    pub fn message(&self) -> String {
        format!(
            "Processing complete. Translated to {} language(s).",
            self.attempted()
        )
    }

    /// Invocation result returned to the hosting runtime.
    pub fn response(&self) -> DispatchResponse {
        DispatchResponse::ok(&self.message())
    }
}

/// Invocation result in the platform's status-code/body shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// JSON-encoded message string
    pub body: String,
}

impl DispatchResponse {
    /// A 200 response whose body is `message` encoded as a JSON string.
    pub fn ok(message: &str) -> Self {
        Self {
            status_code: 200,
            body: Value::String(message.to_string()).to_string(),
        }
    }
}
