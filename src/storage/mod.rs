//! Object store abstraction.
//!
//! The dispatcher reads the request object and writes result objects
//! through [`ObjectStore`]. Production uses S3; the CLI and tests use a
//! directory tree.
//!
//! ## Local Layout
//!
//! ```text
//! {root}/
//! ├── source-bucket/
//! │   └── in/doc.json
//! └── destination-bucket/
//!     └── output/
//!         ├── doc_es.json
//!         └── doc_fr.json
//! ```

pub mod local;
#[cfg(feature = "aws")]
pub mod s3;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;
#[cfg(feature = "aws")]
pub use s3::S3Storage;

/// Trait for blob storage backends addressed by bucket and key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the whole object. Fails if it does not exist or cannot be read.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// Create or replace an object.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}
