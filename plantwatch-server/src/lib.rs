//! plantwatch-server: HTTP API over the plant-monitoring schema
//!
//! Every table is exposed as a resource with two read endpoints:
//! the most recently inserted row and a lookup by primary key.
//! Sensor readings are the one resource that also accepts writes.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError};
pub use http::{router, run_server, AppState, ServerConfig};
