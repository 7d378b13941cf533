//! Number acquisition.
//!
//! A number can reach the router from several places: typed by hand, pasted,
//! picked from contacts, or delivered by an inbound dial, view or share
//! request. Each source has its own extraction rule, applied before the text
//! is normalized.

mod vcard;

pub use vcard::{extract_vcard_number, VCARD_CELL_MARKER};

use crate::domain::CanonicalNumber;
use crate::error::{RouterError, RouterResult};
use tracing::debug;

/// Length of the scheme prefix dropped from dial payloads.
pub const DIAL_PREFIX_LEN: usize = 3;

/// MIME types accepted for shared contact cards.
pub const VCARD_MIME_TYPES: [&str; 2] = ["text/x-vcard", "text/vcard"];

/// Where a raw phone number came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionEvent {
    /// Text typed into the number field.
    ManualEntry(String),

    /// Result of a paste action. `None` when the clipboard holds no text.
    Clipboard(Option<String>),

    /// Phone field returned by the contact picker. `None` when cancelled.
    ContactPick(Option<String>),

    /// Payload of an inbound dial request, e.g. `tel:+442071234567`.
    Dial(String),

    /// An inbound view request for a URI.
    View {
        scheme: String,
        scheme_specific_part: String,
    },

    /// A contact card shared into the app.
    SharedVcard { mime_type: String, payload: String },
}

impl AcquisitionEvent {
    /// Build a `View` event from a raw URI such as `tel:+15551234`.
    ///
    /// A string without a `:` has no scheme and yields an empty scheme.
    pub fn view_from_uri(uri: &str) -> Self {
        let (scheme, rest) = uri.split_once(':').unwrap_or(("", uri));
        Self::View {
            scheme: scheme.to_string(),
            scheme_specific_part: rest.to_string(),
        }
    }

    /// Short name of the source, for logging.
    pub fn source(&self) -> &'static str {
        match self {
            Self::ManualEntry(_) => "manual",
            Self::Clipboard(_) => "clipboard",
            Self::ContactPick(_) => "contact",
            Self::Dial(_) => "dial",
            Self::View { .. } => "view",
            Self::SharedVcard { .. } => "vcard",
        }
    }

    /// Extract and normalize the number carried by this event.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::EmptyClipboard` for a paste with no text. Every
    /// other source degrades to an empty number instead of failing.
    pub fn extract(&self) -> RouterResult<CanonicalNumber> {
        let number = match self {
            Self::ManualEntry(text) => CanonicalNumber::normalize(text),
            Self::Clipboard(text) => from_clipboard(text.as_deref())?,
            Self::ContactPick(phone) => from_contact_pick(phone.as_deref()),
            Self::Dial(payload) => from_dial(payload),
            Self::View {
                scheme,
                scheme_specific_part,
            } => from_view(scheme, scheme_specific_part),
            Self::SharedVcard { mime_type, payload } => from_shared_vcard(mime_type, payload),
        };

        debug!(source = self.source(), number = %number, "Extracted number");
        Ok(number)
    }
}

/// Number from a dial payload: the first three characters are dropped.
pub fn from_dial(payload: &str) -> CanonicalNumber {
    // The prefix is counted in characters, never bytes.
    let rest: String = payload.chars().skip(DIAL_PREFIX_LEN).collect();
    CanonicalNumber::normalize(&rest)
}

/// Number from a view request; only the `tel` scheme carries one.
pub fn from_view(scheme: &str, scheme_specific_part: &str) -> CanonicalNumber {
    if scheme.eq_ignore_ascii_case("tel") {
        CanonicalNumber::normalize(scheme_specific_part)
    } else {
        debug!(scheme, "Ignoring view request with non-tel scheme");
        CanonicalNumber::empty()
    }
}

/// Number from a shared contact card of the given MIME type.
pub fn from_shared_vcard(mime_type: &str, payload: &str) -> CanonicalNumber {
    let accepted = VCARD_MIME_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(mime_type.trim()));
    if !accepted {
        debug!(mime_type, "Ignoring share with unsupported MIME type");
        return CanonicalNumber::empty();
    }

    extract_vcard_number(payload)
        .map(CanonicalNumber::normalize)
        .unwrap_or_default()
}

/// Number from the phone field returned by the contact picker.
pub fn from_contact_pick(phone: Option<&str>) -> CanonicalNumber {
    phone.map(CanonicalNumber::normalize).unwrap_or_default()
}

/// Number from clipboard text.
///
/// # Errors
///
/// Returns `RouterError::EmptyClipboard` when there is no text item.
pub fn from_clipboard(text: Option<&str>) -> RouterResult<CanonicalNumber> {
    text.map(CanonicalNumber::normalize)
        .ok_or(RouterError::EmptyClipboard)
}
