//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::kv::{DynamoDbItemStore, ItemStore};
use crate::storage::{ObjectStore, S3ObjectStore};

/// Shared application state
///
/// Immutable after startup; requests only read from it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    object_store: Arc<dyn ObjectStore>,
    item_store: Arc<dyn ItemStore>,
}

impl AppState {
    /// Create application state from explicit backends
    pub fn new(
        config: Config,
        object_store: Arc<dyn ObjectStore>,
        item_store: Arc<dyn ItemStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                object_store,
                item_store,
            }),
        }
    }

    /// Create application state backed by S3 and DynamoDB
    pub async fn from_config(config: Config) -> Self {
        let object_store = S3ObjectStore::new(&config.object_store).await;
        let item_store = DynamoDbItemStore::new(&config.key_value).await;
        Self::new(config, Arc::new(object_store), Arc::new(item_store))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the object store
    pub fn object_store(&self) -> &dyn ObjectStore {
        self.inner.object_store.as_ref()
    }

    /// Get the item store
    pub fn item_store(&self) -> &dyn ItemStore {
        self.inner.item_store.as_ref()
    }
}
