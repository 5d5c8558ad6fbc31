//! AWS Lambda entry point for the translator.
//!
//! Deploy with `cargo lambda build --release --features lambda`.
//!
//! ## Environment Variables
//!
//! - `OUTPUT_BUCKET`: destination bucket for result files (required)
//! - `OUTPUT_PREFIX`: key prefix for result files (default: `output`)
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use lambda_runtime::{Error as LambdaError, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translator::lambda::{Clients, handler};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Translator Lambda starting...");

    let clients = Clients::load().await;

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handler(event, &clients)
    }))
    .await
}
