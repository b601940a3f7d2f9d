//! Request models with validation at construction
//!
//! Client input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod reading;
pub mod validation;

pub use reading::{NewReading, HUMIDITY_FIELD, TEMPERATURE_FIELD};
pub use validation::ValidationError;
