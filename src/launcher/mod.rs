//! Handing produced links to the host environment.

use crate::domain::TargetApp;
use std::io::{self, Write};
use thiserror::Error;

/// Failure reported by the host when launching a link.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// No installed application handles the link
    #[error("No application can handle the link")]
    NotFound,

    /// The host failed for another reason
    #[error("Launch failed: {0}")]
    Failed(String),
}

/// The host's ability to open links and share text.
pub trait UriLauncher {
    /// Open `uri`, which is addressed to `app`.
    fn launch(&mut self, app: TargetApp, uri: &str) -> Result<(), LaunchError>;

    /// Offer `text` through a generic share sheet.
    fn share_text(&mut self, text: &str) -> Result<(), LaunchError>;
}

impl<L: UriLauncher + ?Sized> UriLauncher for &mut L {
    fn launch(&mut self, app: TargetApp, uri: &str) -> Result<(), LaunchError> {
        (**self).launch(app, uri)
    }

    fn share_text(&mut self, text: &str) -> Result<(), LaunchError> {
        (**self).share_text(text)
    }
}

/// Launcher that writes each link on its own line.
///
/// Used by the command line host, where "opening" a link means printing it
/// for another program to consume.
#[derive(Debug)]
pub struct StdoutLauncher<W = io::Stdout> {
    out: W,
}

impl StdoutLauncher {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutLauncher<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> Result<(), LaunchError> {
        writeln!(self.out, "{}", line)
            .and_then(|_| self.out.flush())
            .map_err(|e| LaunchError::Failed(e.to_string()))
    }
}

impl<W: Write> UriLauncher for StdoutLauncher<W> {
    fn launch(&mut self, _app: TargetApp, uri: &str) -> Result<(), LaunchError> {
        self.write_line(uri)
    }

    fn share_text(&mut self, text: &str) -> Result<(), LaunchError> {
        self.write_line(text)
    }
}
