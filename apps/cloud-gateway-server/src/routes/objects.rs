//! Object API routes

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    routing::{get, put},
    Json, Router,
};

use crate::error::Result;
use crate::state::AppState;

/// Create the objects router
///
/// Upload bodies are buffered in memory, up to `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/s3/objects/:bucket_name", get(list_objects))
        .route(
            "/s3/objects/:bucket_name/:object_key",
            put(put_object)
                .delete(delete_object)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

/// List the first page of object keys in a bucket
async fn list_objects(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<Json<Vec<String>>> {
    let keys = state.object_store().list_objects(&bucket_name).await?;
    Ok(Json(keys))
}

/// Upload or replace an object
async fn put_object(
    State(state): State<AppState>,
    Path((bucket_name, object_key)): Path<(String, String)>,
    body: Bytes,
) -> Result<String> {
    state
        .object_store()
        .put_object(&bucket_name, &object_key, body)
        .await?;
    Ok(format!("Object {} uploaded/updated in {}", object_key, bucket_name))
}

/// Delete an object
async fn delete_object(
    State(state): State<AppState>,
    Path((bucket_name, object_key)): Path<(String, String)>,
) -> Result<String> {
    state
        .object_store()
        .delete_object(&bucket_name, &object_key)
        .await?;
    Ok(format!("Object {} deleted from {}", object_key, bucket_name))
}
