// src/models/mod.rs

//! Data structures exchanged with the notification source, the object
//! store and the translation service.

mod event;
mod request;
mod result;

// Re-export all public types
pub use event::{S3Bucket, S3Entity, S3EventRecord, S3Object, SourceObject, base_name};
pub use request::{TranslationArgs, TranslationRequest, target_label};
pub use result::{TranslationResult, output_key};
