//! DynamoDB-backed item store

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};

use crate::config::KeyValueConfig;
use crate::error::ItemStoreError;
use crate::sdk::load_sdk_config;

use super::types::{Item, PARTITION_KEY};
use super::ItemStore;

/// Item store bound to one DynamoDB table
#[derive(Clone)]
pub struct DynamoDbItemStore {
    client: Client,
    table_name: String,
}

impl DynamoDbItemStore {
    /// Create a new DynamoDB item store from configuration
    pub async fn new(config: &KeyValueConfig) -> Self {
        let sdk_config = load_sdk_config(config.region.as_deref(), config.credentials.as_ref()).await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        tracing::info!(
            "DynamoDB item store ready (table: {}, endpoint: {})",
            config.table_name,
            config.endpoint.as_deref().unwrap_or("default")
        );

        Self {
            client: Client::from_conf(builder.build()),
            table_name: config.table_name.clone(),
        }
    }

    /// Client handle for a single operation; clones share one connection pool
    fn handle(&self) -> Client {
        self.client.clone()
    }
}

fn scan_error(table: &str, message: String) -> ItemStoreError {
    ItemStoreError::Scan {
        table: table.to_string(),
        message,
    }
}

/// Convert one scan page; a value of unknown type fails the whole scan
fn items_from_page(
    table: &str,
    page: Vec<HashMap<String, AttributeValue>>,
) -> Result<Vec<Item>, ItemStoreError> {
    page.into_iter()
        .map(|attributes| {
            Item::from_attributes(attributes).map_err(|e| scan_error(table, e.to_string()))
        })
        .collect()
}

#[async_trait]
impl ItemStore for DynamoDbItemStore {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn scan_all(&self) -> Result<Vec<Item>, ItemStoreError> {
        let client = self.handle();
        let response = client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| scan_error(&self.table_name, DisplayErrorContext(&e).to_string()))?;

        if response.last_evaluated_key().is_some() {
            tracing::debug!("Scan of {} returned a partial page", self.table_name);
        }

        items_from_page(&self.table_name, response.items.unwrap_or_default())
    }

    async fn put_item(&self, item: Item) -> Result<(), ItemStoreError> {
        let client = self.handle();
        client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item.into_attributes()))
            .send()
            .await
            .map_err(|e| ItemStoreError::Put {
                table: self.table_name.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<(), ItemStoreError> {
        let client = self.handle();
        client
            .delete_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| ItemStoreError::Delete {
                table: self.table_name.clone(),
                id: id.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;
    use crate::error::AppError;
    use crate::kv::{AttrValue, UnsupportedAttribute};

    #[test]
    fn test_scan_page_converts_items() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), AttributeValue::S("x".to_string()));
        attributes.insert("qty".to_string(), AttributeValue::N("2".to_string()));

        let items = items_from_page("MyTable", vec![attributes]).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), Some(&AttrValue::S("x".to_string())));
        assert_eq!(items[0].get("qty"), Some(&AttrValue::N("2".to_string())));
    }

    #[tokio::test]
    async fn test_unsupported_value_fails_scan_with_bad_request() {
        let unsupported = UnsupportedAttribute("Unknown".to_string());
        let err = scan_error("MyTable", unsupported.to_string());

        match &err {
            ItemStoreError::Scan { table, message } => {
                assert_eq!(table, "MyTable");
                assert!(message.contains("Unsupported attribute value"));
            }
            other => panic!("expected scan error, got {:?}", other),
        }

        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Failed to scan items");
    }

    #[tokio::test]
    async fn test_new_binds_configured_table() {
        let config = KeyValueConfig {
            region: Some("us-west-2".to_string()),
            endpoint: Some("http://localhost:4566".to_string()),
            credentials: None,
            table_name: "Inventory".to_string(),
        };
        let store = DynamoDbItemStore::new(&config).await;
        assert_eq!(store.table_name(), "Inventory");
    }
}
