//! Object store adapter
//!
//! Bucket and object CRUD against S3 or any S3-compatible backend.

mod s3_client;
mod types;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StorageError;

pub use s3_client::S3ObjectStore;
pub use types::*;

/// Object storage backend
///
/// Every method issues exactly one backend request.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Names of all buckets owned by the caller
    async fn list_buckets(&self) -> Result<Vec<String>, StorageError>;

    async fn create_bucket(&self, name: &str) -> Result<CreatedBucket, StorageError>;

    async fn delete_bucket(&self, name: &str) -> Result<(), StorageError>;

    /// First page of object keys in a bucket, at most [`MAX_LIST_KEYS`] entries
    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>, StorageError>;

    /// Store `body` under `key`, replacing any existing object
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), StorageError>;

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError>;
}
