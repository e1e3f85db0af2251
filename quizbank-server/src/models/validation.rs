//! Validation error types
//!
//! Only type-level checks happen at the boundary: ids must be integers and
//! bodies must be well-formed JSON of the expected shape.

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Path segment is not a valid integer id
    InvalidId { field: &'static str, value: String },

    /// Path segment missing or unreadable
    MissingPath { field: &'static str },

    /// Request body could not be read as the expected JSON shape
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            Self::MissingPath { field } => write!(f, "missing path parameter: {}", field),
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
