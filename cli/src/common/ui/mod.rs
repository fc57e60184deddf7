//! # Nova UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The chat session talks to its display through the `DisplaySink` trait: an
//! append-only sink of lines, each tagged with who said it. The session never
//! reads anything back.
//!
//! `Terminal` is the sink used by the `chat` and `ask` commands. It prefixes
//! assistant lines with the assistant's name (`Nova: Hello!`) and user lines
//! with `You:`. When the user is typing at a real terminal their line is
//! already on screen, so echoing can be switched off.
//!
use std::io::Write;
use tracing::warn;

/// Who a displayed line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// Append-only text display.
pub trait DisplaySink {
    fn show(&mut self, speaker: Speaker, text: &str);
}

/// Line-oriented display on any writer, usually stdout.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
    assistant_name: String,
    echo_user: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, assistant_name: &str, echo_user: bool) -> Self {
        Self {
            out,
            assistant_name: assistant_name.to_string(),
            echo_user,
        }
    }

    /// Writes `prompt` without a newline and flushes, for interactive input.
    pub fn prompt(&mut self, prompt: &str) {
        if let Err(e) = write!(self.out, "{}", prompt).and_then(|_| self.out.flush()) {
            warn!("Failed to write prompt: {}", e);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for Terminal<W> {
    fn show(&mut self, speaker: Speaker, text: &str) {
        let result = match speaker {
            Speaker::User if !self.echo_user => return,
            Speaker::User => writeln!(self.out, "You: {}", text),
            Speaker::Assistant => writeln!(self.out, "{}: {}", self.assistant_name, text),
        };
        if let Err(e) = result.and_then(|_| self.out.flush()) {
            warn!("Failed to write to display: {}", e);
        }
    }
}

/// Collects lines in memory. Test helper.
#[cfg(test)]
impl DisplaySink for Vec<(Speaker, String)> {
    fn show(&mut self, speaker: Speaker, text: &str) {
        self.push((speaker, text.to_string()));
    }
}
