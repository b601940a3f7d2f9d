//! Route handlers
//!
//! - health: liveness and database reachability
//! - resources: get-latest / get-by-key for every table
//! - sensors: sensor readings, the one writable resource

pub mod health;
pub mod resources;
pub mod sensors;
