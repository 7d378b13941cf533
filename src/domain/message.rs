//! ShareMessage value object.

use std::fmt;

/// Free-form text to attach to a chat link.
///
/// There is no length or charset restriction. The text is percent-encoded
/// only when it is placed into a URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareMessage(String);

impl ShareMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Wrap optional text, treating an empty string as no message.
    pub fn from_optional(text: Option<String>) -> Option<Self> {
        text.filter(|t| !t.is_empty()).map(Self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShareMessage {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for ShareMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
