//! # Nova CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `ask.rs`, ...).
//! Each test file in `cli/tests/` is its own crate and pulls this in with
//! `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

pub const GREETINGS: [&str; 4] = ["Hello!", "Hey there!", "Hi human!", "Greetings!"];

pub const FALLBACKS: [&str; 3] = [
    "Hmm, not sure I understood.",
    "Can you rephrase that?",
    "I didn't get that, try again?",
];

/// # Get Nova Command (`nova_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `nova` binary.
///
/// The command runs inside a fresh temporary directory that also serves as
/// `HOME`, with `NOVA_CONFIG` cleared, so no user config, stray `.nova.toml`,
/// or environment setting leaks in. The
/// returned `TempDir` must be kept alive for the duration of the test.
///
/// ## Panics
/// Panics if the `nova` binary cannot be found via `Command::cargo_bin`.
pub fn nova_cmd() -> (Command, TempDir) {
    let workdir = tempfile::tempdir().expect("Failed to create temp working dir");
    std::fs::create_dir(workdir.path().join(".git")).expect("Failed to create .git marker");
    let mut cmd = Command::cargo_bin("nova").expect("Failed to find nova binary for testing");
    cmd.current_dir(workdir.path())
        .env_remove("NOVA_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path().join("config"));
    (cmd, workdir)
}

/// Writes `contents` as `nova.toml` inside `dir` and returns its path.
pub fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("nova.toml");
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}
