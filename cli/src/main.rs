//! # Nova Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Nova chat assistant.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the configuration
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Talk to Nova
//! nova chat
//!
//! # One-shot questions, with debug logging on stderr
//! nova -vv ask "what is 9/2"
//!
//! # Use a specific configuration file
//! nova --config ~/nova.toml chat --no-browser
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Reply logic: session, rules, tasks, arithmetic
mod commands; // Command handlers (chat, ask)
mod common; // Display and browser adapters
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "nova",
    about = "Nova: a small chat assistant for jokes, simple maths, weather and time lookups",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user and project files.
    #[arg(long, global = true, env = "NOVA_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat interactively on the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Send one or more messages and print the replies.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let config = crate::core::config::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &config).await,
        Commands::Ask(args) => commands::ask::handle_ask(args, &config).await,
    }
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn nova_cmd() -> Command {
        Command::cargo_bin("nova").expect("Failed to find nova binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        nova_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        nova_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
