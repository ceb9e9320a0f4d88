//! Key-value adapter
//!
//! Item CRUD against a single DynamoDB table chosen at startup.

mod dynamodb_client;
mod types;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::error::ItemStoreError;

pub use dynamodb_client::DynamoDbItemStore;
pub use types::*;

/// Key-value backend bound to one table
#[async_trait]
pub trait ItemStore: Send + Sync {
    fn table_name(&self) -> &str;

    /// Items returned by a single scan request; a truncated page is returned as-is
    async fn scan_all(&self) -> Result<Vec<Item>, ItemStoreError>;

    /// Insert or replace the item with the same `id`
    async fn put_item(&self, item: Item) -> Result<(), ItemStoreError>;

    /// Delete by partition key; succeeds whether or not the item exists
    async fn delete_item(&self, id: &str) -> Result<(), ItemStoreError>;
}
