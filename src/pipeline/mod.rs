//! Pipeline entry points for translation requests.
//!
//! - `TranslationDispatcher`: handles one object-created notification
//! - `DispatchReport`: per-language outcomes and the invocation result

pub mod dispatch;
pub mod report;

pub use dispatch::TranslationDispatcher;
pub use report::{DispatchReport, DispatchResponse, FailureStage, LanguageOutcome, LanguageReport};
