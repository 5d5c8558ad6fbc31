//! Amazon Translate client.

use async_trait::async_trait;
use aws_sdk_translate::Client;
use aws_sdk_translate::error::DisplayErrorContext;

use crate::error::{AppError, Result};
use crate::translate::TranslationService;

/// Translation backed by the `TranslateText` API.
#[derive(Clone)]
pub struct AwsTranslate {
    client: Client,
}

impl AwsTranslate {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a client from a loaded AWS configuration.
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl TranslationService for AwsTranslate {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|e| AppError::translate(target_language, DisplayErrorContext(&e)))?;

        Ok(output.translated_text().to_string())
    }
}
