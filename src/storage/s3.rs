//! AWS S3 object store.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

use crate::error::{AppError, Result, s3_uri};
use crate::storage::ObjectStore;

/// S3-backed object store. Cloning shares the underlying client.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    /// Create a new S3 storage instance around an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create S3 storage from a loaded AWS configuration.
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl ObjectStore for S3Storage {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::storage(s3_uri(bucket, key), DisplayErrorContext(&e)))?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| AppError::storage(s3_uri(bucket, key), e))?;

        let body = bytes.into_bytes().to_vec();
        debug!("Read {} bytes from {}", body.len(), s3_uri(bucket, key));
        Ok(body)
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        let len = body.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| AppError::storage(s3_uri(bucket, key), DisplayErrorContext(&e)))?;

        debug!("Wrote {} bytes to {}", len, s3_uri(bucket, key));
        Ok(())
    }
}
