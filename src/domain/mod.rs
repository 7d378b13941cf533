//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values that flow through
//! the routing pipeline: the canonical phone number, the region hint used for
//! validation, the optional share message and the target messaging app.

pub mod canonical_number;
pub mod errors;
pub mod message;
pub mod region;
pub mod target_app;

pub use canonical_number::CanonicalNumber;
pub use errors::ValidationError;
pub use message::ShareMessage;
pub use region::Region;
pub use target_app::TargetApp;
