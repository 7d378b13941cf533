//! Deep link construction.
//!
//! Turns a canonical number and an optional message into a URI that opens a
//! chat in the target app. Leading trunk zeros are stripped here, after
//! validation has already run.

use crate::domain::{CanonicalNumber, ShareMessage, TargetApp};
use crate::error::{RouterError, RouterResult};
use tracing::debug;

/// Which form of link to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Open the chat directly in the app.
    Open,

    /// A web link that can be handed to a generic share sheet.
    Share,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Share => "share",
        }
    }
}

/// Percent-encode message text as UTF-8 for use in a query string.
pub fn encode_message(message: &ShareMessage) -> String {
    urlencoding::encode(message.as_str()).into_owned()
}

/// Build the `phone=..&text=..` query for WhatsApp links.
///
/// A parameter whose value is empty is left out, and `&` only appears when
/// both parameters are present.
pub fn build_query(number: &CanonicalNumber, message: Option<&ShareMessage>) -> String {
    let mut params = Vec::with_capacity(2);

    // A literal '+' in a query decodes as a space.
    let phone = number.as_str().trim_start_matches('+').trim_start_matches('0');
    if !phone.is_empty() {
        params.push(format!("phone={}", urlencoding::encode(phone)));
    }

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        params.push(format!("text={}", encode_message(message)));
    }

    params.join("&")
}

/// Build a deep link for `app`.
///
/// # Errors
///
/// - `RouterError::UnsupportedLink` when `kind` has no form for `app`
/// - `RouterError::UriSyntax` when the result is not a valid URI, or when an
///   app addressed by path gets no number
pub fn build_link(
    app: TargetApp,
    number: &CanonicalNumber,
    message: Option<&ShareMessage>,
    kind: LinkKind,
) -> RouterResult<String> {
    let template = match kind {
        LinkKind::Open => app.open_template(),
        LinkKind::Share => app.share_template().ok_or(RouterError::UnsupportedLink {
            app,
            kind: kind.as_str(),
        })?,
    };

    let link = if app.supports_message() {
        template.replace("{query}", &build_query(number, message))
    } else {
        if message.is_some_and(|m| !m.is_empty()) {
            debug!(%app, "Dropping message, app links cannot carry text");
        }
        let target = number.without_trunk_zeros();
        if !target.chars().any(|c| c.is_ascii_digit()) {
            return Err(RouterError::UriSyntax(format!(
                "{} link needs a phone number",
                app
            )));
        }
        template.replace("{number}", target)
    };

    url::Url::parse(&link).map_err(|e| RouterError::UriSyntax(format!("{}: {}", link, e)))?;

    debug!(%app, kind = kind.as_str(), link = %link, "Built deep link");
    Ok(link)
}
