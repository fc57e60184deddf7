//! # Shared Session Options
//!
//! File: cli/src/commands/options.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Flags accepted by every command that runs a chat session, and the glue that
//! turns them plus the loaded `Config` into a ready `Session`.
//!
//! Command-line flags only ever restrict the configuration: `--no-browser`
//! disables the browser even when the config enables it, never the reverse.
//!
use crate::bot::select::RandomSelector;
use crate::bot::session::Session;
use crate::bot::task::Lookups;
use crate::common::browser::{opener_for, UriOpener};
use crate::core::config::Config;
use clap::Args;
use tracing::debug;

/// Options common to `nova chat` and `nova ask`.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionOptions {
    /// Print lookup URLs instead of opening them in a browser.
    #[arg(long)]
    pub no_browser: bool,

    /// Seed for picking greetings, jokes, and fallbacks (reproducible replies).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// The session type the terminal commands run.
pub type TerminalSession = Session<RandomSelector, Box<dyn UriOpener>>;

impl SessionOptions {
    /// Builds a session from the effective configuration and these flags.
    pub fn build_session(&self, config: &Config) -> TerminalSession {
        let browser_enabled = config.browser.enabled && !self.no_browser;
        debug!(
            "Building session: browser_enabled={}, seed={:?}",
            browser_enabled, self.seed
        );
        let selector = match self.seed {
            Some(seed) => RandomSelector::seeded(seed),
            None => RandomSelector::from_entropy(),
        };
        Session::new(
            config.assistant.name.clone(),
            Lookups::from(&config.browser),
            selector,
            opener_for(browser_enabled),
        )
    }
}
