//! Error types for the Cloud Gateway server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
///
/// Every variant is reported to the caller as `400 Bad Request` with a plain-text body.
/// Backend detail is logged, never returned.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Object store error: {0}")]
    Storage(#[from] StorageError),

    #[error("Item store error: {0}")]
    Items(#[from] ItemStoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Object store failures, one per operation
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to list buckets: {0}")]
    ListBuckets(String),

    #[error("Failed to create bucket {bucket}: {message}")]
    CreateBucket { bucket: String, message: String },

    #[error("Failed to delete bucket {bucket}: {message}")]
    DeleteBucket { bucket: String, message: String },

    #[error("Failed to list objects in {bucket}: {message}")]
    ListObjects { bucket: String, message: String },

    #[error("Failed to put object {key} in {bucket}: {message}")]
    PutObject {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to delete object {key} from {bucket}: {message}")]
    DeleteObject {
        bucket: String,
        key: String,
        message: String,
    },
}

impl StorageError {
    /// Message returned to the HTTP caller
    pub fn client_message(&self) -> &'static str {
        match self {
            StorageError::ListBuckets(_) => "Failed to list buckets",
            StorageError::CreateBucket { .. } => "Failed to create bucket",
            StorageError::DeleteBucket { .. } => "Failed to delete bucket",
            StorageError::ListObjects { .. } => "Failed to list objects",
            StorageError::PutObject { .. } => "Failed to upload/update object",
            StorageError::DeleteObject { .. } => "Failed to delete object",
        }
    }
}

/// Key-value store failures
#[derive(Error, Debug)]
pub enum ItemStoreError {
    #[error("Failed to scan table {table}: {message}")]
    Scan { table: String, message: String },

    #[error("Failed to put item into {table}: {message}")]
    Put { table: String, message: String },

    #[error("Failed to delete item {id} from {table}: {message}")]
    Delete {
        table: String,
        id: String,
        message: String,
    },
}

impl ItemStoreError {
    /// Message returned to the HTTP caller
    pub fn client_message(&self) -> &'static str {
        match self {
            ItemStoreError::Scan { .. } => "Failed to scan items",
            ItemStoreError::Put { .. } => "Failed to save item",
            ItemStoreError::Delete { .. } => "Failed to delete item",
        }
    }
}

/// Rejected caller input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Item must contain 'id' as a key")]
    MissingId,

    #[error("Invalid item JSON: {0}")]
    MalformedItem(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Storage(e) => {
                tracing::warn!("Object store error: {}", e);
                e.client_message().to_string()
            }
            AppError::Items(e) => {
                tracing::warn!("Item store error: {}", e);
                e.client_message().to_string()
            }
            AppError::Validation(e) => {
                tracing::debug!("Rejected input: {}", e);
                e.to_string()
            }
        };

        (StatusCode::BAD_REQUEST, message).into_response()
    }
}
