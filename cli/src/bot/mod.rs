//! # Nova Reply Logic (`bot`)
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that decides what Nova says lives here, independent of the
//! terminal:
//!
//! - `session`: the dialogue controller (`Session::submit`)
//! - `task`: the pending-task state machine for the weather and time lookups
//! - `reply`: ordered keyword rules with arithmetic and fallback
//! - `arithmetic`: the two-operand evaluator
//! - `select`: random (or scripted) picks from reply pools
//!
//! The display and the browser are reached only through the `DisplaySink` and
//! `UriOpener` traits from `common`.
//!
//! ```rust
//! let mut session = Session::new("Nova", Lookups::default(), RandomSelector::from_entropy(), SystemBrowser);
//! session.submit("tell me a joke", &mut terminal);
//! ```
//!
pub mod arithmetic;
pub mod reply;
pub mod select;
pub mod session;
pub mod task;
