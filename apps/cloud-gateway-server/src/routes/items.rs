//! DynamoDB item API routes

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

use crate::error::Result;
use crate::kv::Item;
use crate::state::AppState;

/// Create the items router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dynamodb/items", get(scan_items).post(put_item))
        .route("/dynamodb/items/:id", delete(delete_item))
}

/// Return every item the table scan yields
async fn scan_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>> {
    let items = state.item_store().scan_all().await?;
    Ok(Json(items))
}

/// Create or replace an item
///
/// The body is the item's attribute map and must contain `id`.
async fn put_item(State(state): State<AppState>, body: Bytes) -> Result<String> {
    let item = Item::from_json_slice(&body)?;
    tracing::debug!(
        "Saving item with {} attributes to {}",
        item.len(),
        state.item_store().table_name()
    );

    state.item_store().put_item(item).await?;
    Ok("Item saved to DynamoDB.".to_string())
}

/// Delete an item by id
async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> Result<String> {
    state.item_store().delete_item(&id).await?;
    Ok(format!("Item with id={} deleted.", id))
}
