//! numroute - phone number routing into messaging apps.
//!
//! This library takes a phone number from wherever the user got it (typed,
//! pasted, picked from contacts, or delivered by a dial, view or share
//! request), reduces it to a canonical form, validates it for a sticky default
//! region, and builds a deep link that opens a chat in WhatsApp, Telegram or
//! Signal.
//!
//! # Architecture
//!
//! - **domain**: Value objects for numbers, regions, messages and target apps
//! - **acquisition**: Per-source extraction of raw numbers
//! - **validation**: Region-aware validation over the `phonenumber` crate
//! - **links**: Deep link construction and message encoding
//! - **store**: Persisted last-used region
//! - **launcher**: Handing links to the host environment
//! - **router**: The pipeline tying the above together
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod acquisition;
pub mod config;
pub mod domain;
pub mod error;
pub mod launcher;
pub mod links;
pub mod router;
pub mod store;
pub mod validation;

pub use acquisition::AcquisitionEvent;
pub use config::Config;
pub use domain::{CanonicalNumber, Region, ShareMessage, TargetApp, ValidationError};
pub use error::{ConfigError, RouterError, RouterResult, StoreError};
pub use launcher::{LaunchError, StdoutLauncher, UriLauncher};
pub use links::{build_link, LinkKind};
pub use router::{NumberRouter, Outcome};
pub use store::{InMemoryRegionStore, JsonFileRegionStore, RegionStore};
pub use validation::{validate, LibPhoneNumberParser, NumberParser, Validation, Validator};

/// Collapse raw text into a canonical number. See [`CanonicalNumber::normalize`].
pub fn normalize(raw: &str) -> CanonicalNumber {
    CanonicalNumber::normalize(raw)
}
