//! Region value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static REGION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("Failed to compile region regex"));

/// A two-letter country code used as the default region for validation.
///
/// Only the shape is checked here. Whether the numbering plan knows the
/// region is up to the number parser.
///
/// # Example
///
/// ```
/// use numroute::domain::Region;
///
/// let region = Region::new("de").unwrap();
/// assert_eq!(region.as_str(), "DE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Create a new Region, upper-casing the code.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRegion` unless the trimmed code is
    /// exactly two ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let upper = code.trim().to_ascii_uppercase();

        if !REGION_REGEX.is_match(&upper) {
            return Err(ValidationError::InvalidRegion(code));
        }

        Ok(Self(upper))
    }

    /// Get the region code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::new(s)
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Region::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
