//! # Nova Interactive Chat (`nova chat`)
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs an interactive session on the terminal: a banner, then one reply per
//! line read from stdin. The session ends when the user types `exit`, when
//! stdin reaches end of input, or on Ctrl-C (which still says goodbye).
//!
//! When stdin is a terminal a `You: ` prompt is shown and typed lines are not
//! echoed again. When stdin is piped the prompt is dropped and every input
//! line is echoed, so the output reads as a full transcript.
//!
//! ## Examples
//!
//! ```bash
//! nova chat
//! printf 'weather\nyes\nOslo\nexit\n' | nova chat --no-browser
//! ```
//!
use super::options::SessionOptions;
use crate::bot::select::Selector;
use crate::bot::session::Session;
use crate::common::browser::UriOpener;
use crate::common::ui::Terminal;
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::future::Future;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Arguments for `nova chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub session: SessionOptions,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Reads lines until the session is over. Each line is fully answered before
/// the next one is read.
///
/// ## Errors
///
/// Returns an error only if reading stdin fails.
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Starting chat session with args: {:?}", args);
    let interactive = std::io::stdin().is_terminal();

    let mut session = args.session.build_session(config);
    let mut terminal = Terminal::new(std::io::stdout(), session.name(), !interactive);
    session.greet(&mut terminal);

    drive_session(
        &mut session,
        &mut terminal,
        BufReader::new(tokio::io::stdin()),
        interactive,
        tokio::signal::ctrl_c,
    )
    .await
}

/// Feeds lines from `reader` to `session` until it ends, input runs out, or
/// `interrupt` completes.
///
/// `interrupt` is called once per turn. If it fails, interrupts are no longer
/// watched and reading carries on.
async fn drive_session<S, O, R, W, I, F>(
    session: &mut Session<S, O>,
    terminal: &mut Terminal<W>,
    reader: R,
    interactive: bool,
    mut interrupt: I,
) -> Result<()>
where
    S: Selector,
    O: UriOpener,
    R: AsyncBufRead + Unpin,
    W: Write,
    I: FnMut() -> F,
    F: Future<Output = std::io::Result<()>>,
{
    let mut lines = reader.lines();
    let mut watch_interrupt = true;
    while session.is_active() {
        if interactive {
            terminal.prompt("You: ");
        }
        tokio::select! {
            biased;
            signal = interrupt(), if watch_interrupt => match signal {
                Ok(()) => {
                    info!("Interrupted, closing session.");
                    if interactive {
                        terminal.prompt("\n");
                    }
                    session.end(terminal);
                }
                Err(e) => {
                    warn!("Could not listen for Ctrl-C, continuing without it: {}", e);
                    watch_interrupt = false;
                }
            },
            line = lines.next_line() => {
                match line.context("Failed to read from stdin")? {
                    Some(line) => {
                        let outcome = session.submit(&line, terminal);
                        tracing::trace!(
                            "Turn outcome: {:?}, pending task: {:?}",
                            outcome,
                            session.pending()
                        );
                    }
                    None => {
                        info!("End of input, closing session.");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
