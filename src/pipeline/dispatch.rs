// src/pipeline/dispatch.rs

//! Translation dispatcher.
//!
//! Handles one object-created notification:
//! 1. Extracts the source bucket and key from the first record
//! 2. Reads and validates the translation request stored there
//! 3. Resolves the destination bucket
//! 4. Translates into each target language in order, writing one result
//!    object per language and skipping languages that fail

use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::config::DispatcherConfig;
use crate::error::{AppError, Result, s3_uri};
use crate::models::{
    SourceObject, TranslationRequest, TranslationResult, output_key, target_label,
};
use crate::pipeline::report::{DispatchReport, FailureStage, LanguageOutcome};
use crate::storage::ObjectStore;
use crate::translate::TranslationService;

/// Runs the translate-and-write pipeline against borrowed clients.
///
/// Clients are created once per process and lent to a dispatcher per
/// invocation.
pub struct TranslationDispatcher<'a> {
    store: &'a dyn ObjectStore,
    translator: &'a dyn TranslationService,
    config: DispatcherConfig,
}

impl<'a> TranslationDispatcher<'a> {
    pub fn new(
        store: &'a dyn ObjectStore,
        translator: &'a dyn TranslationService,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            store,
            translator,
            config,
        }
    }

    /// Handle one notification event.
    ///
    /// Errors returned here are fatal for the invocation. Per-language
    /// failures are recorded in the report instead.
    #[instrument(skip_all)]
    pub async fn handle(&self, event: &Value) -> Result<DispatchReport> {
        info!("Received event: {}", event);

        let source = SourceObject::from_event(event).inspect_err(|e| {
            error!("Failed to parse S3 event: {}", e);
        })?;
        info!("Processing file: {}", source.uri());

        let request = self.fetch_request(&source).await?;

        let destination = self.config.destination_bucket().inspect_err(|e| {
            error!("{}", e);
        })?;
        info!("Destination bucket: {}", destination);

        let mut report = DispatchReport::new(source.clone(), destination);
        for target in &request.target_language_codes {
            let outcome = self
                .process_language(&request, &source, destination, target)
                .await;
            report.record(target_label(target), outcome);
        }

        let failed = report.failures().len();
        if failed > 0 {
            warn!(
                "Completed {}: {} written, {} failed of {} requested",
                source.uri(),
                report.attempted() - failed,
                failed,
                report.attempted()
            );
        } else {
            info!(
                "Completed {}: {} of {} written",
                source.uri(),
                report.attempted(),
                report.attempted()
            );
        }

        Ok(report)
    }

    /// Read, decode and validate the request object.
    async fn fetch_request(&self, source: &SourceObject) -> Result<TranslationRequest> {
        let uri = source.uri();

        let body = self
            .store
            .get_object(&source.bucket, &source.key)
            .await
            .map_err(|e| AppError::source_read(&uri, e))
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|e| AppError::source_read(&uri, e))
            })
            .inspect_err(|e| error!("Error reading from S3: {}", e))?;

        let document: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::source_read(&uri, e))
            .inspect_err(|e| error!("Error reading from S3: {}", e))?;
        info!("Raw file content: {}", body);

        let request = TranslationRequest::from_value(&document)
            .inspect_err(|e| error!("Invalid JSON structure in input file: {}", e))?;

        info!("Text to translate: {}", request.text);
        info!("Source language: {}", request.source_language_code);
        info!(
            "Target languages: {}",
            serde_json::Value::Array(request.target_language_codes.clone())
        );

        Ok(request)
    }

    /// Translate into one language and store the result.
    async fn process_language(
        &self,
        request: &TranslationRequest,
        source: &SourceObject,
        destination: &str,
        target: &Value,
    ) -> LanguageOutcome {
        let label = target_label(target);
        info!("Translating to: {}", label);

        let translated = match request.translation_args(target) {
            Ok(args) => self
                .translator
                .translate(args.text, args.source_language, args.target_language)
                .await
                .map(|text| (args, text)),
            Err(e) => Err(e),
        };

        let (args, translated_text) = match translated {
            Ok(translated) => translated,
            Err(e) => {
                error!("Error calling Translate for {}: {}", label, e);
                return LanguageOutcome::Failed {
                    stage: FailureStage::Translate,
                    message: e.to_string(),
                };
            }
        };
        info!("Translated text ({}): {}", label, translated_text);

        let key = output_key(
            &self.config.output_prefix,
            source.base_name(),
            args.target_language,
        );
        let result = TranslationResult {
            original_text: args.text.to_string(),
            translated_text,
            source_language: args.source_language.to_string(),
            target_language: args.target_language.to_string(),
        };

        let written = match result.to_json_bytes() {
            Ok(body) => self.store.put_object(destination, &key, body).await,
            Err(e) => Err(e),
        };

        match written {
            Ok(()) => {
                info!("Successfully written to: {}", s3_uri(destination, &key));
                LanguageOutcome::Written { key }
            }
            Err(e) => {
                error!("Error writing to S3 for {}: {}", label, e);
                LanguageOutcome::Failed {
                    stage: FailureStage::Write,
                    message: e.to_string(),
                }
            }
        }
    }
}
