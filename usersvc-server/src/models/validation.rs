//! Validation error types

use std::fmt;

/// Validation error for user payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or empty
    MissingFields { fields: Vec<&'static str> },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { .. } => write!(f, "Name and email are required."),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Names of the fields that failed validation.
    pub fn fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields { fields } => fields,
        }
    }
}
