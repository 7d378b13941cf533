//! Configuration management for numroute.
//!
//! This module handles loading and validating configuration from environment variables.
//! Stdout carries the produced links, so nothing here prints to it.

use crate::domain::{Region, TargetApp};
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the numroute host.
#[derive(Debug, Clone)]
pub struct Config {
    /// Region used until a number validates and sets a new one (default: "US")
    pub default_region: Region,

    /// Path of the JSON preference file (default: "numroute-prefs.json")
    pub prefs_path: PathBuf,

    /// App opened when none is given (default: WhatsApp)
    pub default_app: TargetApp,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `NUMROUTE_DEFAULT_REGION`: Two-letter fallback region (default: US)
    /// - `NUMROUTE_PREFS_PATH`: Preference file path (default: numroute-prefs.json)
    /// - `NUMROUTE_DEFAULT_APP`: whatsapp, telegram or signal (default: whatsapp)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; a missing file is fine.
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let default_region = match env::var("NUMROUTE_DEFAULT_REGION") {
            Ok(val) => Region::new(val.as_str()).map_err(|e| ConfigError::InvalidValue {
                var: "NUMROUTE_DEFAULT_REGION".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => defaults.default_region,
        };

        let prefs_path = match env::var("NUMROUTE_PREFS_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "NUMROUTE_PREFS_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.prefs_path,
        };

        let default_app = match env::var("NUMROUTE_DEFAULT_APP") {
            Ok(val) => val
                .parse::<TargetApp>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "NUMROUTE_DEFAULT_APP".to_string(),
                    reason,
                })?,
            Err(_) => defaults.default_app,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            default_region,
            prefs_path,
            default_app,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_region: Region::new("US").expect("US is a valid region"),
            prefs_path: PathBuf::from("numroute-prefs.json"),
            default_app: TargetApp::WhatsApp,
            log_level: "error".to_string(),
        }
    }
}
