//! numroute - command line host.
//!
//! Plays the part of the platform around the routing pipeline: the command
//! line supplies the acquisition event, a JSON file keeps the sticky region,
//! and "launching" a link prints it to stdout.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use numroute::{
    normalize, AcquisitionEvent, Config, JsonFileRegionStore, LibPhoneNumberParser,
    NumberRouter, Outcome, RouterError, ShareMessage, StdoutLauncher, TargetApp,
};
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "numroute")]
#[command(about = "Open a messaging chat for a phone number", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Target {
    /// App to open: whatsapp, telegram or signal
    #[arg(short, long)]
    app: Option<TargetApp>,

    /// Message to attach (WhatsApp only)
    #[arg(short, long)]
    message: Option<OsString>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of a number
    Normalize {
        /// Raw number text
        raw: String,
    },

    /// Open a chat for a typed number
    Open {
        /// Phone number as typed
        number: String,
        #[command(flatten)]
        target: Target,
    },

    /// Print a WhatsApp web link suitable for sharing
    Share {
        /// Phone number as typed; may be empty
        #[arg(default_value = "")]
        number: String,
        /// Message to attach
        #[arg(short, long)]
        message: Option<OsString>,
    },

    /// Handle a dial request payload such as tel:+442071234567
    Dial {
        payload: String,
        #[command(flatten)]
        target: Target,
    },

    /// Handle a view request for a URI such as tel:+15551234
    View {
        uri: String,
        #[command(flatten)]
        target: Target,
    },

    /// Handle a shared contact card
    Vcard {
        /// Path of the vCard file
        file: PathBuf,
        /// MIME type the card was shared with
        #[arg(long, default_value = "text/x-vcard")]
        mime: String,
        #[command(flatten)]
        target: Target,
    },

    /// Use the text on stdin as clipboard contents
    Paste {
        #[command(flatten)]
        target: Target,
    },

    /// Use a phone field returned by a contact picker
    Contact {
        /// Phone field; omit when the pick was cancelled
        phone: Option<String>,
        #[command(flatten)]
        target: Target,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr; stdout carries only the produced links.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration loaded");

    match run(cli.command, &config) {
        Ok(outcome) => {
            if let Some(outcome) = outcome {
                if !outcome.validation.is_valid {
                    eprintln!("Incorrect phone number: {}", outcome.validation.value);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Routing failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<Option<Outcome>, RouterError> {
    let (event, target) = match command {
        Commands::Normalize { raw } => {
            println!("{}", normalize(&raw));
            return Ok(None);
        }
        Commands::Share { number, message } => {
            let mut router = build_router(config)?;
            let message = decode_message(message)?;
            router.acquire(&AcquisitionEvent::ManualEntry(number))?;
            let outcome = router.share(message.as_ref(), &mut StdoutLauncher::new())?;
            return Ok(Some(outcome));
        }
        Commands::Open { number, target } => (AcquisitionEvent::ManualEntry(number), target),
        Commands::Dial { payload, target } => (AcquisitionEvent::Dial(payload), target),
        Commands::View { uri, target } => (AcquisitionEvent::view_from_uri(&uri), target),
        Commands::Vcard { file, mime, target } => {
            // An unreadable card behaves like a card without a number.
            let payload = std::fs::read_to_string(&file).unwrap_or_else(|e| {
                error!(path = %file.display(), error = %e, "Failed to read vCard");
                String::new()
            });
            (
                AcquisitionEvent::SharedVcard {
                    mime_type: mime,
                    payload,
                },
                target,
            )
        }
        Commands::Paste { target } => (AcquisitionEvent::Clipboard(read_clipboard()), target),
        Commands::Contact { phone, target } => (AcquisitionEvent::ContactPick(phone), target),
    };

    let mut router = build_router(config)?;
    let message = decode_message(target.message)?;
    let app = target.app.unwrap_or(config.default_app);

    router.acquire(&event)?;
    let outcome = router.open(app, message.as_ref(), &mut StdoutLauncher::new())?;
    Ok(Some(outcome))
}

fn build_router(
    config: &Config,
) -> Result<NumberRouter<JsonFileRegionStore, LibPhoneNumberParser>, RouterError> {
    NumberRouter::new(
        JsonFileRegionStore::new(&config.prefs_path),
        LibPhoneNumberParser::new(),
        config.default_region.clone(),
    )
}

/// Message arguments must be UTF-8; anything else is reported, never dropped.
fn decode_message(message: Option<OsString>) -> Result<Option<ShareMessage>, RouterError> {
    match message {
        Some(raw) => {
            let text = raw.into_string().map_err(|raw| {
                RouterError::Encoding(format!("message is not valid UTF-8: {:?}", raw))
            })?;
            Ok(ShareMessage::from_optional(Some(text)))
        }
        None => Ok(None),
    }
}

/// Stdin stands in for the clipboard; no text means an empty clipboard.
fn read_clipboard() -> Option<String> {
    let mut text = String::new();
    match std::io::stdin().read_to_string(&mut text) {
        Ok(_) => clipboard_item(text),
        Err(e) => {
            error!(error = %e, "Failed to read clipboard text from stdin");
            None
        }
    }
}

/// Any text, whitespace included, is a clipboard item. Only no text at all
/// is an empty clipboard.
fn clipboard_item(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
