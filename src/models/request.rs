//! Translation request read from the source object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Body of an uploaded request file.
///
/// ```json
/// {"Text": "Hello", "SourceLanguageCode": "en", "TargetLanguageCodes": ["es", "fr"]}
/// ```
///
/// Field values are kept as JSON. A value of the wrong type only fails the
/// translation call that uses it, so it costs a single language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TranslationRequest {
    /// Text to translate
    pub text: Value,

    /// Language code of `text`
    pub source_language_code: Value,

    /// Languages to translate into, in processing order
    pub target_language_codes: Vec<Value>,
}

/// Arguments for one translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationArgs<'a> {
    pub text: &'a str,
    pub source_language: &'a str,
    pub target_language: &'a str,
}

impl TranslationRequest {
    /// Validate a parsed JSON document and extract the request.
    ///
    /// All three fields must be present. `TargetLanguageCodes` must be an
    /// array; a bare string or an object is rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::invalid_request("request body is not a JSON object"))?;

        let field = |name: &str| {
            object
                .get(name)
                .cloned()
                .ok_or_else(|| AppError::invalid_request(format!("missing field '{}'", name)))
        };

        let text = field("Text")?;
        let source_language_code = field("SourceLanguageCode")?;

        let target_language_codes = match field("TargetLanguageCodes")? {
            Value::Array(codes) => codes,
            _ => {
                return Err(AppError::invalid_request(
                    "TargetLanguageCodes must be a list of language codes",
                ));
            }
        };

        Ok(Self {
            text,
            source_language_code,
            target_language_codes,
        })
    }

    /// Number of requested target languages.
    pub fn target_count(&self) -> usize {
        self.target_language_codes.len()
    }

    /// Arguments for translating into `target`.
    ///
    /// Fails for this target alone when any of the values is not a string.
    pub fn translation_args<'a>(&'a self, target: &'a Value) -> Result<TranslationArgs<'a>> {
        let label = target_label(target);
        let as_str = |value: &'a Value, name: &str| {
            value.as_str().ok_or_else(|| {
                AppError::translate(&label, format!("{} must be a string, got {}", name, value))
            })
        };

        Ok(TranslationArgs {
            text: as_str(&self.text, "Text")?,
            source_language: as_str(&self.source_language_code, "SourceLanguageCode")?,
            target_language: as_str(target, "TargetLanguageCode")?,
        })
    }
}

/// Printable form of a target entry: the code itself, or its JSON text.
pub fn target_label(target: &Value) -> String {
    match target {
        Value::String(code) => code.clone(),
        other => other.to_string(),
    }
}
