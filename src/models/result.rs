//! Per-language translation result written to the destination bucket.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One result file, written for every target language that translated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
}

impl TranslationResult {
    /// Pretty-printed UTF-8 JSON body. Non-ASCII text is written as-is.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Destination key for a result: `{prefix}/{base}_{target}.json`.
pub fn output_key(prefix: &str, base_name: &str, target_language: &str) -> String {
    format!("{}/{}_{}.json", prefix, base_name, target_language)
}
