//! Cloud Gateway Server
//!
//! REST facade over S3 buckets/objects and the items of a DynamoDB table.
//!
//! # Modules
//!
//! - `storage`: object store adapter (S3)
//! - `kv`: key-value adapter (DynamoDB)
//! - `routes`: HTTP router and handlers
//! - `config`: environment-driven configuration

pub mod config;
pub mod error;
pub mod kv;
pub mod routes;
pub mod sdk;
pub mod state;
pub mod storage;

pub use config::Config;
pub use state::AppState;
