//! Number parser adapter.
//!
//! Numbering-plan rules live in the `phonenumber` crate. This module hides it
//! behind [`NumberParser`] so the router can be tested with a scripted parser.

use crate::domain::Region;
use phonenumber::country;
use phonenumber::Mode;
use tracing::{debug, error};

/// What a parser could make of a raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    /// The number formatted as E.164 by the library.
    pub e164: String,

    /// Whether the number is valid for its numbering plan.
    pub is_valid: bool,

    /// Region the number belongs to, when the library can tell.
    pub region: Option<Region>,
}

/// Region-aware phone number parsing.
pub trait NumberParser {
    /// Parse `input`, reading national numbers as belonging to
    /// `default_region`. Returns `None` when the input cannot be parsed.
    fn parse(&self, input: &str, default_region: &Region) -> Option<ParsedNumber>;
}

impl<P: NumberParser + ?Sized> NumberParser for &P {
    fn parse(&self, input: &str, default_region: &Region) -> Option<ParsedNumber> {
        (**self).parse(input, default_region)
    }
}

impl<P: NumberParser + ?Sized> NumberParser for Box<P> {
    fn parse(&self, input: &str, default_region: &Region) -> Option<ParsedNumber> {
        (**self).parse(input, default_region)
    }
}

/// [`NumberParser`] backed by the `phonenumber` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumberParser;

impl LibPhoneNumberParser {
    pub fn new() -> Self {
        Self
    }

    /// Map a region code to the library's country id; unknown codes give `None`.
    fn country_id(region: &Region) -> Option<country::Id> {
        region.as_str().parse::<country::Id>().ok()
    }
}

impl NumberParser for LibPhoneNumberParser {
    fn parse(&self, input: &str, default_region: &Region) -> Option<ParsedNumber> {
        let country = Self::country_id(default_region);
        if country.is_none() {
            debug!(region = %default_region, "Default region unknown to numbering plan");
        }

        let owned = input.to_string();
        // The library has a few internal unwraps; keep a panic inside the adapter.
        let result = std::panic::catch_unwind(move || phonenumber::parse(country, owned));

        let number = match result {
            Ok(Ok(number)) => number,
            Ok(Err(err)) => {
                debug!(error = ?err, "Failed to parse phone number");
                return None;
            }
            Err(_) => {
                error!("phonenumber crate panicked while parsing phone number");
                return None;
            }
        };

        let region = number
            .country()
            .id()
            .and_then(|id| Region::new(format!("{:?}", id)).ok());

        Some(ParsedNumber {
            e164: number.format().mode(Mode::E164).to_string(),
            is_valid: phonenumber::is_valid(&number),
            region,
        })
    }
}
