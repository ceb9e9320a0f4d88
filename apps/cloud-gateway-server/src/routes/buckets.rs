//! Bucket API routes

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::state::AppState;

/// Create the buckets router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/s3/buckets", get(list_buckets))
        .route(
            "/s3/buckets/:bucket_name",
            post(create_bucket).delete(delete_bucket),
        )
}

/// List all bucket names
async fn list_buckets(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let buckets = state.object_store().list_buckets().await?;
    Ok(Json(buckets))
}

/// Create a bucket
async fn create_bucket(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<impl IntoResponse> {
    let created = state.object_store().create_bucket(&bucket_name).await?;
    tracing::info!("Bucket {} created", created.name);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location)],
        created.name,
    ))
}

/// Delete an empty bucket
async fn delete_bucket(
    State(state): State<AppState>,
    Path(bucket_name): Path<String>,
) -> Result<String> {
    state.object_store().delete_bucket(&bucket_name).await?;
    tracing::info!("Bucket {} deleted", bucket_name);
    Ok(format!("Bucket {} deleted", bucket_name))
}
