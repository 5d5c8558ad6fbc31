//! Translator CLI
//!
//! Local execution entry point. For AWS Lambda, use `translator-lambda`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;
use translator::{
    config::DispatcherConfig,
    error::{AppError, Result},
    models::{TranslationRequest, base_name, output_key, target_label},
    pipeline::{LanguageOutcome, TranslationDispatcher},
    storage::LocalStorage,
    translate::AwsTranslate,
};

/// Translator - replay S3 translation requests locally
#[derive(Parser, Debug)]
#[command(
    name = "translator",
    version,
    about = "Translate JSON text requests into one file per target language"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Handle an object-created event against a local bucket directory
    Run {
        /// Path to the notification event JSON
        #[arg(short, long)]
        event: PathBuf,

        /// Directory holding one sub-directory per bucket
        #[arg(short, long, default_value = "storage")]
        storage_dir: PathBuf,

        /// Destination bucket (default: $OUTPUT_BUCKET)
        #[arg(short, long)]
        output_bucket: Option<String>,
    },

    /// Validate a request file and list the keys a run would write
    Validate {
        /// Path to the translation request JSON
        request: PathBuf,

        /// Source key to derive output names from (default: the file name)
        #[arg(long)]
        source_key: Option<String>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run {
            event,
            storage_dir,
            output_bucket,
        } => {
            let event = read_json(&event)?;

            let mut config = DispatcherConfig::from_env();
            if let Some(bucket) = output_bucket {
                config = config.with_output_bucket(bucket);
            }

            log::info!("Using local buckets under {}", storage_dir.display());
            let storage = LocalStorage::new(&storage_dir);

            let aws_config =
                aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let translator = AwsTranslate::from_config(&aws_config);

            let dispatcher = TranslationDispatcher::new(&storage, &translator, config);
            let report = dispatcher.handle(&event).await?;

            println!("{}", serde_json::to_string_pretty(&report.response())?);

            let written = report.written_keys();
            log::info!(
                "{} wrote {} result(s) to bucket '{}'",
                report.source.uri(),
                written.len(),
                report.destination_bucket
            );

            for language in report.failures() {
                if let LanguageOutcome::Failed { stage, message } = &language.outcome {
                    log::warn!(
                        "{} failed at {:?}: {}",
                        language.target_language,
                        stage,
                        message
                    );
                }
            }
        }

        Command::Validate {
            request,
            source_key,
        } => {
            let document = read_json(&request)?;
            let parsed = TranslationRequest::from_value(&document)?;

            let source_key = match source_key {
                Some(key) => key,
                None => request
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .ok_or_else(|| AppError::invalid_request("request path has no file name"))?,
            };

            let prefix = DispatcherConfig::from_env().output_prefix;
            log::info!(
                "✓ Request OK: {} -> {} language(s)",
                parsed.source_language_code,
                parsed.target_count()
            );
            for target in &parsed.target_language_codes {
                match parsed.translation_args(target) {
                    Ok(args) => println!(
                        "{}",
                        output_key(&prefix, base_name(&source_key), args.target_language)
                    ),
                    Err(e) => log::warn!("{} would be skipped: {}", target_label(target), e),
                }
            }
        }
    }

    Ok(())
}
