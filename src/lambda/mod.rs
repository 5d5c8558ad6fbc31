// src/lambda/mod.rs

//! AWS Lambda handler for the dispatcher.
//!
//! Clients are built once per execution environment by [`Clients::load`]
//! and lent to every invocation. Configuration is read from the
//! environment on each invocation.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::config::DispatcherConfig;
use crate::pipeline::{DispatchResponse, TranslationDispatcher};
use crate::storage::S3Storage;
use crate::translate::AwsTranslate;

/// Long-lived service clients shared across invocations.
#[derive(Clone)]
pub struct Clients {
    pub storage: S3Storage,
    pub translator: AwsTranslate,
}

impl Clients {
    /// Load the shared AWS configuration and build both clients.
    pub async fn load() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::from_config(&config)
    }

    /// Build both clients from an already loaded configuration.
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self {
            storage: S3Storage::from_config(config),
            translator: AwsTranslate::from_config(config),
        }
    }
}

/// Main Lambda handler function.
///
/// Fatal errors are returned to the runtime so the invocation is reported
/// as failed.
#[instrument(skip(event, clients), fields(request_id = %event.context.request_id))]
pub async fn handler(
    event: LambdaEvent<Value>,
    clients: &Clients,
) -> std::result::Result<DispatchResponse, LambdaError> {
    let (payload, _context) = event.into_parts();

    let dispatcher = TranslationDispatcher::new(
        &clients.storage,
        &clients.translator,
        DispatcherConfig::from_env(),
    );

    match dispatcher.handle(&payload).await {
        Ok(report) => {
            info!(
                "Invocation complete for {}: {} requested, {} written to {}",
                report.source.uri(),
                report.attempted(),
                report.written_keys().len(),
                report.destination_bucket
            );
            Ok(report.response())
        }
        Err(e) => {
            error!("Invocation failed: {}", e);
            Err(e.into())
        }
    }
}
