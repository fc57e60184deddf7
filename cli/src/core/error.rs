//! # Nova Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Nova. It provides a
//! consistent approach to error management with two layers:
//!
//! - `NovaError`: A custom error enum using `thiserror` for the failures the
//!   reply logic knows how to recover from, plus configuration problems.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by application-level
//!   code (config loading, terminal I/O) where context matters more than the type.
//!
//! ## Recovery
//!
//! Neither `ArithmeticParse` nor `ExternalOpen` ever ends a chat session:
//!
//! - `ArithmeticParse` is turned into a "simple maths only" hint by the reply engine.
//! - `ExternalOpen` is turned into a "Couldn't open browser." message by the
//!   task handler, which also resets the pending task.
//!
//! ```rust
//! match arithmetic::evaluate("5+x") {
//!     Ok(answer) => println!("{}", answer),
//!     Err(e) => debug!("Falling back to the maths hint: {}", e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Nova application.
#[derive(Error, Debug)]
pub enum NovaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot evaluate '{expression}': {reason}")]
    ArithmeticParse { expression: String, reason: String },

    #[error("Failed to open '{uri}': {source}")]
    ExternalOpen {
        uri: String,
        #[source]
        source: std::io::Error,
    },
}

impl NovaError {
    /// Shorthand for building an `ArithmeticParse` error.
    pub fn arithmetic(expression: &str, reason: impl Into<String>) -> Self {
        NovaError::ArithmeticParse {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
