//! Route modules for Cloud Gateway Server

pub mod buckets;
pub mod docs;
pub mod health;
pub mod items;
pub mod objects;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_upload_bytes = state.config().server.max_upload_bytes;

    Router::new()
        .merge(docs::router())
        .merge(health::router())
        .merge(buckets::router())
        .merge(objects::router(max_upload_bytes))
        .merge(items::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
