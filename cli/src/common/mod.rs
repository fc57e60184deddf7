//! # Nova Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Adapters between the reply logic in `bot` and the outside world:
//!
//! - **`browser`**: The `UriOpener` trait, the system browser launcher, the
//!   dry-run opener, and lookup URL construction.
//! - **`ui`**: The `DisplaySink` trait and the terminal display.
//!

/// Opening lookup pages in the platform browser.
pub mod browser;
/// Terminal output for chat transcripts.
pub mod ui;
