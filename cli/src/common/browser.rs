//! # Nova Browser Utilities (`common::browser`)
//!
//! File: cli/src/common/browser.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The weather and time lookups end by handing a URL to the user's browser.
//! This module owns that hand-off behind the `UriOpener` trait:
//!
//! - `SystemBrowser`: launches the platform default browser via the `open` crate.
//! - `DryRunOpener`: prints the URL instead (`--no-browser`, or
//!   `browser.enabled = false`). Handy on headless machines and in tests.
//!
//! Opening is fire-and-forget. Nova never waits on the browser process; the
//! only failure it sees is the platform refusing to dispatch the request.
//!
use crate::core::error::NovaError;
use std::io::Write;
use tracing::debug;
use url::form_urlencoded;

/// Capability to open a URI somewhere outside Nova.
pub trait UriOpener {
    fn open(&mut self, uri: &str) -> Result<(), NovaError>;
}

impl<T: UriOpener + ?Sized> UriOpener for Box<T> {
    fn open(&mut self, uri: &str) -> Result<(), NovaError> {
        (**self).open(uri)
    }
}

/// Picks the opener for a session: the real browser, or a dry run on stdout.
pub fn opener_for(browser_enabled: bool) -> Box<dyn UriOpener> {
    if browser_enabled {
        Box::new(SystemBrowser)
    } else {
        Box::new(DryRunOpener::stdout())
    }
}

/// Builds a lookup URL by appending the form-urlencoded `query` to `base`.
///
/// Spaces become `+`, everything outside `[A-Za-z0-9*-._]` is percent-encoded.
pub fn lookup_uri(base: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}{}", base, encoded)
}

/// Opens URIs with the operating system's default handler.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl UriOpener for SystemBrowser {
    fn open(&mut self, uri: &str) -> Result<(), NovaError> {
        debug!("Dispatching {} to the system browser", uri);
        open::that_detached(uri).map_err(|source| NovaError::ExternalOpen {
            uri: uri.to_string(),
            source,
        })
    }
}

/// Writes the URI to a sink instead of opening it.
#[derive(Debug)]
pub struct DryRunOpener<W: Write> {
    out: W,
}

impl<W: Write> DryRunOpener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl DryRunOpener<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> UriOpener for DryRunOpener<W> {
    fn open(&mut self, uri: &str) -> Result<(), NovaError> {
        writeln!(self.out, "Browser disabled, would open: {}", uri).map_err(|source| {
            NovaError::ExternalOpen {
                uri: uri.to_string(),
                source,
            }
        })
    }
}

/// Records every URI instead of opening it; can be told to fail. Test helper.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
    fail: bool,
}

#[cfg(test)]
impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            opened: Vec::new(),
            fail: true,
        }
    }
}

#[cfg(test)]
impl UriOpener for RecordingOpener {
    fn open(&mut self, uri: &str) -> Result<(), NovaError> {
        if self.fail {
            return Err(NovaError::ExternalOpen {
                uri: uri.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser available"),
            });
        }
        self.opened.push(uri.to_string());
        Ok(())
    }
}
