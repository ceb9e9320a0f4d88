//! In-memory item store used by router tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ItemStoreError;

use super::types::{AttrValue, Item};
use super::ItemStore;

#[derive(Default)]
pub struct InMemoryItemStore {
    items: Mutex<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    fn table_name(&self) -> &str {
        "MyTable"
    }

    async fn scan_all(&self) -> Result<Vec<Item>, ItemStoreError> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn put_item(&self, item: Item) -> Result<(), ItemStoreError> {
        let mut items = self.items.lock().unwrap();
        items.retain(|existing| existing.id() != item.id());
        items.push(item);
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<(), ItemStoreError> {
        let key = AttrValue::S(id.to_string());
        self.items
            .lock()
            .unwrap()
            .retain(|existing| existing.id() != Some(&key));
        Ok(())
    }
}
