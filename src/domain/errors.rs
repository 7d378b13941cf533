//! Domain validation errors.

use super::CanonicalNumber;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The number could not be validated for any region.
    ///
    /// `best_effort` carries whatever the parsing library could still format,
    /// so callers can show it next to the error instead of clearing the field.
    Invalid { best_effort: CanonicalNumber },

    /// The provided region code is not a two-letter country code.
    InvalidRegion(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { best_effort } if best_effort.is_empty() => {
                write!(f, "Invalid phone number")
            }
            Self::Invalid { best_effort } => write!(f, "Invalid phone number: {}", best_effort),
            Self::InvalidRegion(region) => write!(f, "Invalid region code: {}", region),
        }
    }
}

impl std::error::Error for ValidationError {}
