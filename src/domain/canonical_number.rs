//! CanonicalNumber value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number reduced to `+` and ASCII digits.
///
/// The wrapped string always matches `^\+?[0-9]+$` or is empty. An empty
/// number means "no valid number yet" and is a normal state, not an error.
///
/// # Example
///
/// ```
/// use numroute::domain::CanonicalNumber;
///
/// let number = CanonicalNumber::normalize("+1 (415) 555-1234");
/// assert_eq!(number.as_str(), "+14155551234");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    /// Collapse arbitrary text into a canonical number.
    ///
    /// ASCII digits are kept. A `+` survives only ahead of the first digit,
    /// and repeats collapse to one. Everything else is dropped. This never
    /// fails: text without digits becomes the empty number.
    pub fn normalize(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
                out.push(c);
            }
        }

        // A lone `+` is not a number.
        if out == "+" {
            out.clear();
        }
        Self(out)
    }

    /// The empty number.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Whether no number has been acquired.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The number with any leading trunk zeros removed.
    pub fn without_trunk_zeros(&self) -> &str {
        self.0.trim_start_matches('0')
    }
}

impl From<&str> for CanonicalNumber {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl Serialize for CanonicalNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialization goes through `normalize` so the invariant always holds.
impl<'de> Deserialize<'de> for CanonicalNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CanonicalNumber::normalize(&s))
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
