//! Supported messaging apps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A messaging application that can be opened through a deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetApp {
    WhatsApp,
    Telegram,
    Signal,
}

impl TargetApp {
    /// All supported apps.
    pub const ALL: [TargetApp; 3] = [TargetApp::WhatsApp, TargetApp::Telegram, TargetApp::Signal];

    /// Human readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Signal => "Signal",
        }
    }

    /// URI template for opening a chat directly. `{query}` / `{number}` are
    /// replaced by the link builder.
    pub fn open_template(&self) -> &'static str {
        match self {
            Self::WhatsApp => "whatsapp://send/?{query}",
            Self::Telegram => "https://t.me/{number}",
            Self::Signal => "https://signal.me/#p/{number}",
        }
    }

    /// URI template safe to hand to a generic share sheet, if the app has one.
    pub fn share_template(&self) -> Option<&'static str> {
        match self {
            Self::WhatsApp => Some("https://api.whatsapp.com/send?{query}"),
            Self::Telegram | Self::Signal => None,
        }
    }

    /// Whether a text message can be attached to the link.
    pub fn supports_message(&self) -> bool {
        matches!(self, Self::WhatsApp)
    }

    /// Localization key of the "app not installed" notice.
    pub fn not_found_message_key(&self) -> &'static str {
        match self {
            Self::WhatsApp => "error_whatsapp_not_installed",
            Self::Telegram => "error_telegram_not_installed",
            Self::Signal => "error_signal_not_installed",
        }
    }

    /// Default English text for the "app not installed" notice.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp is not installed",
            Self::Telegram => "You have to install Telegram to open the chat",
            Self::Signal => "You have to install Signal to open the chat",
        }
    }
}

impl FromStr for TargetApp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(Self::WhatsApp),
            "telegram" | "tg" => Ok(Self::Telegram),
            "signal" => Ok(Self::Signal),
            other => Err(format!(
                "unknown app '{}', expected one of: whatsapp, telegram, signal",
                other
            )),
        }
    }
}

impl fmt::Display for TargetApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
