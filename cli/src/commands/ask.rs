//! # Nova One-Shot Conversation (`nova ask`)
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Feeds each positional argument to a single session as one turn, in order,
//! and prints the transcript. Multi-turn flows work as they do in `chat`:
//!
//! ```bash
//! nova ask "tell me a joke"
//! nova ask weather yes "New York" --no-browser
//! nova ask "what is 6*7" exit "ignored after exit"
//! ```
//!
use super::options::SessionOptions;
use crate::bot::session::Outcome;
use crate::common::ui::Terminal;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use tracing::{info, warn};

/// Arguments for `nova ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Messages to send, one turn each.
    #[arg(required = true)]
    pub messages: Vec<String>,

    /// Show the introduction banner first.
    #[arg(long)]
    pub greet: bool,

    #[command(flatten)]
    pub session: SessionOptions,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Messages after an `exit` are not processed; each is logged as rejected.
pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    info!("Handling ask command with {} message(s)", args.messages.len());

    let mut session = args.session.build_session(config);
    let mut terminal = Terminal::new(std::io::stdout(), session.name(), true);
    if args.greet {
        session.greet(&mut terminal);
    }

    for message in &args.messages {
        if session.submit(message, &mut terminal) == Outcome::Rejected {
            warn!("Session already ended, ignoring message: {}", message);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_args_parsing() {
        let args = AskArgs::try_parse_from(["ask", "weather", "yes", "Oslo", "--seed", "1"])
            .unwrap();
        assert_eq!(args.messages, vec!["weather", "yes", "Oslo"]);
        assert_eq!(args.session.seed, Some(1));
        assert!(!args.greet);

        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }
}
