//! S3-backed object store
//!
//! Wraps the AWS SDK S3 client.

use async_trait::async_trait;
use aws_sdk_s3::{
    error::DisplayErrorContext,
    primitives::ByteStream,
    types::{BucketLocationConstraint, CreateBucketConfiguration},
    Client,
};
use bytes::Bytes;

use crate::config::ObjectStoreConfig;
use crate::error::StorageError;
use crate::sdk::{load_sdk_config, FALLBACK_REGION};

use super::types::{CreatedBucket, MAX_LIST_KEYS};
use super::ObjectStore;

/// Object store backed by S3 or an S3-compatible service
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Create a new S3 object store from configuration
    pub async fn new(config: &ObjectStoreConfig) -> Self {
        let sdk_config = load_sdk_config(config.region.as_deref(), config.credentials.as_ref()).await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(builder.build());
        tracing::info!(
            "S3 object store ready (region: {}, endpoint: {})",
            region_name(&client),
            config.endpoint.as_deref().unwrap_or("default")
        );

        Self { client }
    }

    /// Client handle for a single operation, dropped when the operation returns.
    ///
    /// Clones share the SDK's connection pool.
    fn handle(&self) -> Client {
        self.client.clone()
    }
}

fn region_name(client: &Client) -> &str {
    client
        .config()
        .region()
        .map(|r| r.as_ref())
        .unwrap_or(FALLBACK_REGION)
}

/// S3 rejects an explicit `us-east-1` location constraint; every other region requires one.
fn bucket_configuration(region: &str) -> Option<CreateBucketConfiguration> {
    if region == FALLBACK_REGION {
        return None;
    }
    Some(
        CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(region))
            .build(),
    )
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        let client = self.handle();
        let response = client
            .list_buckets()
            .send()
            .await
            .map_err(|e| StorageError::ListBuckets(DisplayErrorContext(&e).to_string()))?;

        Ok(response
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(|s| s.to_string()))
            .collect())
    }

    async fn create_bucket(&self, name: &str) -> Result<CreatedBucket, StorageError> {
        let client = self.handle();
        client
            .create_bucket()
            .bucket(name)
            .set_create_bucket_configuration(bucket_configuration(region_name(&client)))
            .send()
            .await
            .map_err(|e| StorageError::CreateBucket {
                bucket: name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!("Created bucket {}", name);
        Ok(CreatedBucket::new(name))
    }

    async fn delete_bucket(&self, name: &str) -> Result<(), StorageError> {
        let client = self.handle();
        client
            .delete_bucket()
            .bucket(name)
            .send()
            .await
            .map_err(|e| StorageError::DeleteBucket {
                bucket: name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!("Deleted bucket {}", name);
        Ok(())
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        let client = self.handle();
        let response = client
            .list_objects_v2()
            .bucket(bucket)
            .max_keys(MAX_LIST_KEYS)
            .send()
            .await
            .map_err(|e| StorageError::ListObjects {
                bucket: bucket.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        if response.is_truncated().unwrap_or(false) {
            tracing::debug!("Listing of {} truncated at {} keys", bucket, MAX_LIST_KEYS);
        }

        Ok(response
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(|s| s.to_string()))
            .take(MAX_LIST_KEYS as usize)
            .collect())
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), StorageError> {
        let client = self.handle();
        let size = body.len();
        client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::PutObject {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!("Stored {} bytes at {}/{}", size, bucket, key);
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let client = self.handle();
        client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteObject {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!("Deleted object {}/{}", bucket, key);
        Ok(())
    }
}
