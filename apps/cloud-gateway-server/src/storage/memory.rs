//! In-memory object store used by router tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StorageError;

use super::types::{CreatedBucket, MAX_LIST_KEYS};
use super::ObjectStore;

type Buckets = BTreeMap<String, BTreeMap<String, Bytes>>;

/// Object store holding buckets in a map, with S3-like failure rules:
/// duplicate or missing buckets and non-empty bucket deletion are errors.
#[derive(Default)]
pub struct InMemoryObjectStore {
    buckets: Mutex<Buckets>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored body for an object, if any
    pub fn object(&self, bucket: &str, key: &str) -> Option<Bytes> {
        self.buckets
            .lock()
            .unwrap()
            .get(bucket)
            .and_then(|objects| objects.get(key).cloned())
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.buckets.lock().unwrap().keys().cloned().collect())
    }

    async fn create_bucket(&self, name: &str) -> Result<CreatedBucket, StorageError> {
        let mut buckets = self.buckets.lock().unwrap();
        if buckets.contains_key(name) {
            return Err(StorageError::CreateBucket {
                bucket: name.to_string(),
                message: "BucketAlreadyOwnedByYou".to_string(),
            });
        }
        buckets.insert(name.to_string(), BTreeMap::new());
        Ok(CreatedBucket::new(name))
    }

    async fn delete_bucket(&self, name: &str) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock().unwrap();
        let message = match buckets.get(name).map(|objects| objects.is_empty()) {
            None => "NoSuchBucket",
            Some(false) => "BucketNotEmpty",
            Some(true) => {
                buckets.remove(name);
                return Ok(());
            }
        };
        Err(StorageError::DeleteBucket {
            bucket: name.to_string(),
            message: message.to_string(),
        })
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        let buckets = self.buckets.lock().unwrap();
        let objects = buckets.get(bucket).ok_or_else(|| StorageError::ListObjects {
            bucket: bucket.to_string(),
            message: "NoSuchBucket".to_string(),
        })?;
        Ok(objects.keys().take(MAX_LIST_KEYS as usize).cloned().collect())
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock().unwrap();
        let objects = buckets.get_mut(bucket).ok_or_else(|| StorageError::PutObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: "NoSuchBucket".to_string(),
        })?;
        objects.insert(key.to_string(), body);
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock().unwrap();
        let objects = buckets.get_mut(bucket).ok_or_else(|| StorageError::DeleteObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: "NoSuchBucket".to_string(),
        })?;
        // S3 reports success for keys that do not exist
        objects.remove(key);
        Ok(())
    }
}
