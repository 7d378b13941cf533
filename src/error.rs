//! Error types for numroute.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every error here is recoverable: the pipeline can always be re-run after the
//! user edits the input.

use crate::domain::{TargetApp, ValidationError};
use thiserror::Error;

/// Errors that can occur while routing a number into a messaging app.
#[derive(Error, Debug)]
pub enum RouterError {
    /// Paste was requested but the clipboard holds no text
    #[error("Clipboard is empty")]
    EmptyClipboard,

    /// The number failed region-aware validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The share message could not be percent-encoded
    #[error("Failed to encode message: {0}")]
    Encoding(String),

    /// The assembled deep link is not a valid URI
    #[error("Malformed link: {0}")]
    UriSyntax(String),

    /// The target app is not installed on this device
    #[error("{} is not installed", .0.display_name())]
    AppNotFound(TargetApp),

    /// The host failed to hand the link over
    #[error("Failed to launch link: {0}")]
    Launch(String),

    /// The requested link form does not exist for the app
    #[error("{app} has no {kind} link")]
    UnsupportedLink { app: TargetApp, kind: &'static str },

    /// The region preference store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RouterError {
    /// Text of the transient notice shown to the user for this error.
    ///
    /// `AppNotFound` maps to a message specific to each app.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyClipboard => "Clipboard is empty".to_string(),
            Self::Validation(_) => "Incorrect phone number".to_string(),
            Self::AppNotFound(app) => app.not_found_message().to_string(),
            other => other.to_string(),
        }
    }
}

/// Errors that can occur in the region preference store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the preference file failed
    #[error("Preference store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file is not valid JSON
    #[error("Preference store parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RouterError
pub type RouterResult<T> = Result<T, RouterError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
