//! Repository implementations for database access
//!
//! One row type per table, all read through the generic [`ResourceRepo`]:
//! - latest: highest primary key, `LIMIT 1`
//! - get: primary-key lookup, `NotFound` when absent
//!
//! Sensor readings additionally have an insert path.

pub mod resource;

pub mod annotations;
pub mod audit_logs;
pub mod devices;
pub mod diagnoses;
pub mod plants;
pub mod samples;
pub mod sensor_readings;
pub mod spatial_ref_sys;
pub mod treatments;
pub mod users;

pub use annotations::Annotation;
pub use audit_logs::AuditLog;
pub use devices::Device;
pub use diagnoses::Diagnose;
pub use plants::Plant;
pub use resource::{Resource, ResourceRepo};
pub use samples::Sample;
pub use sensor_readings::{SensorReading, SensorReadingRepo};
pub use spatial_ref_sys::SpatialRefSys;
pub use treatments::Treatment;
pub use users::User;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
