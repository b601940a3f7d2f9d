//! Validation error types

use std::fmt;

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Body is not JSON at all
    MalformedBody { reason: String },

    /// A required field is absent (or the body is not an object)
    MissingFields { fields: &'static [&'static str] },

    /// Field is present but cannot be read as a finite number
    NotNumeric { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "invalid JSON body: {}", reason),
            Self::MissingFields { fields } => {
                let quoted: Vec<String> = fields.iter().map(|name| format!("\"{}\"", name)).collect();
                write!(f, "JSON with {} is required", quoted.join(" and "))
            }
            Self::NotNumeric { field } => write!(f, "{} must be a number", field),
        }
    }
}

impl std::error::Error for ValidationError {}
