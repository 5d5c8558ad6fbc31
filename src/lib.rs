// src/lib.rs

//! S3-triggered text translation dispatcher library

pub mod config;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod translate;
