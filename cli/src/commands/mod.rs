//! # Nova Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the Nova CLI so that
//! `main.rs` can route to them.
//!
//! ## Commands
//!
//! - `chat`: Interactive session on stdin/stdout
//! - `ask`: Runs the given messages as successive turns of one session
//!
//! Both share `options::SessionOptions` for the browser and seed flags.
//!

/// Interactive terminal chat.
pub mod chat;
/// One-shot conversation from command-line arguments.
pub mod ask;
/// Flags and session construction shared by the commands.
pub mod options;
