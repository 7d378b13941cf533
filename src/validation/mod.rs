//! Region-aware number validation.
//!
//! Validation never throws away what the user typed. A failed validation still
//! reports the best formatting the parser could produce, so the caller can
//! show an inline error next to the number instead of clearing the field.

mod parser;

pub use parser::{LibPhoneNumberParser, NumberParser, ParsedNumber};

use crate::domain::{CanonicalNumber, Region, ValidationError};
use tracing::{debug, warn};

/// Outcome of validating a number.
///
/// `value` and `is_valid` are independent: an invalid number may still have
/// a non-empty best-effort value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// E.164 formatting of the input, or empty when it could not be parsed.
    pub value: CanonicalNumber,

    /// Whether the number passed numbering-plan validation.
    pub is_valid: bool,

    /// Region inferred from a valid number; this becomes the next default.
    pub region: Option<Region>,
}

impl Validation {
    /// Collapse into a `Result`, keeping the best-effort value on failure.
    pub fn into_result(self) -> Result<CanonicalNumber, ValidationError> {
        if self.is_valid {
            Ok(self.value)
        } else {
            Err(ValidationError::Invalid {
                best_effort: self.value,
            })
        }
    }
}

/// Rewrite a leading international `00` prefix to `+`, after trimming.
pub fn prepare_input(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.strip_prefix("00") {
        Some(rest) => format!("+{}", rest),
        None => trimmed.to_string(),
    }
}

/// Validates numbers against a default region using a [`NumberParser`].
#[derive(Debug, Clone, Default)]
pub struct Validator<P> {
    parser: P,
}

impl<P: NumberParser> Validator<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Validate `input`, reading national numbers as `default_region`.
    pub fn validate(&self, input: &str, default_region: &Region) -> Validation {
        let prepared = prepare_input(input);

        let Some(parsed) = self.parser.parse(&prepared, default_region) else {
            warn!(input = %prepared, region = %default_region, "Unparseable phone number");
            return Validation {
                value: CanonicalNumber::empty(),
                is_valid: false,
                region: None,
            };
        };

        let value = CanonicalNumber::normalize(&parsed.e164);
        if !parsed.is_valid {
            warn!(number = %value, region = %default_region, "Phone number failed validation");
            return Validation {
                value,
                is_valid: false,
                region: None,
            };
        }

        debug!(number = %value, region = ?parsed.region, "Phone number validated");
        Validation {
            value,
            is_valid: true,
            region: parsed.region,
        }
    }
}

/// Validate with the `phonenumber`-backed parser.
pub fn validate(input: &str, default_region: &Region) -> Result<CanonicalNumber, ValidationError> {
    Validator::new(LibPhoneNumberParser).validate(input, default_region).into_result()
}
