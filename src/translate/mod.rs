//! Translation service abstraction.

#[cfg(feature = "aws")]
pub mod aws;

use async_trait::async_trait;

use crate::error::Result;

#[cfg(feature = "aws")]
pub use aws::AwsTranslate;

/// Stateless text translation.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translate `text` from `source_language` into `target_language`.
    ///
    /// Fails for unsupported language pairs, exhausted quota or transient
    /// service errors. Callers do not retry.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String>;
}
