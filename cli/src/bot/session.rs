//! # Chat Session
//!
//! File: cli/src/bot/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Session` is the dialogue controller. Every submission goes through
//! `Session::submit`, which:
//!
//! 1. Rejects everything once the session has ended.
//! 2. Trims the input and ignores it if nothing is left.
//! 3. Echoes the input to the display.
//! 4. Ends the session on `exit` (any case), after a farewell.
//! 5. Hands the input to the pending task if there is one, otherwise to the
//!    reply engine.
//!
//! A turn runs to completion before `submit` returns; the session is not
//! shared across threads and needs no locking.
//!
use super::reply::generate_reply;
use super::select::Selector;
use super::task::{advance, Lookups, PendingTask};
use crate::common::browser::UriOpener;
use crate::common::ui::{DisplaySink, Speaker};
use tracing::{debug, info};

pub const EXIT_COMMAND: &str = "exit";
pub const FAREWELL: &str = "Goodbye human! Turning off my circuits...";

/// What happened to one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing shown, nothing changed.
    Ignored,
    /// The session had already ended.
    Rejected,
    /// A reply (or task prompt) was shown.
    Replied,
    /// `exit` was received; the session no longer accepts input.
    Ended,
}

/// One conversation with the assistant.
#[derive(Debug)]
pub struct Session<S, O> {
    name: String,
    lookups: Lookups,
    task: PendingTask,
    active: bool,
    selector: S,
    opener: O,
}

impl<S, O> Session<S, O>
where
    S: Selector,
    O: UriOpener,
{
    pub fn new(name: impl Into<String>, lookups: Lookups, selector: S, opener: O) -> Self {
        Self {
            name: name.into(),
            lookups,
            task: PendingTask::Idle,
            active: true,
            selector,
            opener,
        }
    }

    /// Shows the introduction lines.
    pub fn greet<D: DisplaySink + ?Sized>(&self, display: &mut D) {
        display.show(
            Speaker::Assistant,
            &format!("Hello! I'm {}, your virtual companion.", self.name),
        );
        display.show(
            Speaker::Assistant,
            "Ask me jokes, weather, time, or simple maths!",
        );
        display.show(Speaker::Assistant, "Type 'exit' to stop.");
    }

    /// Processes one user submission.
    pub fn submit<D: DisplaySink + ?Sized>(&mut self, raw: &str, display: &mut D) -> Outcome {
        if !self.active {
            debug!("Session has ended, rejecting input");
            return Outcome::Rejected;
        }

        let input = raw.trim();
        if input.is_empty() {
            return Outcome::Ignored;
        }

        display.show(Speaker::User, input);

        if input.eq_ignore_ascii_case(EXIT_COMMAND) {
            info!("Exit requested, ending session");
            display.show(Speaker::Assistant, FAREWELL);
            self.active = false;
            return Outcome::Ended;
        }

        if self.task.is_idle() {
            let reply = generate_reply(input, &self.name, &mut self.task, &mut self.selector);
            display.show(Speaker::Assistant, &reply);
        } else {
            let step = advance(self.task, input, &self.lookups, &mut self.opener);
            debug!("Pending task {:?} -> {:?}", self.task, step.next);
            self.task = step.next;
            if let Some(reply) = step.reply {
                display.show(Speaker::Assistant, &reply);
            }
        }
        Outcome::Replied
    }

    /// Ends the session from outside the conversation (e.g. Ctrl-C).
    /// Says goodbye unless the session has already ended.
    pub fn end<D: DisplaySink + ?Sized>(&mut self, display: &mut D) {
        if self.active {
            display.show(Speaker::Assistant, FAREWELL);
            self.active = false;
        }
    }

    pub fn pending(&self) -> PendingTask {
        self.task
    }

    /// False once `exit` has been received.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn opener(&self) -> &O {
        &self.opener
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::reply::{GREETINGS, TIME_PROMPT, WEATHER_PROMPT};
    use crate::bot::select::ScriptedSelector;
    use crate::common::browser::RecordingOpener;

    type Lines = Vec<(Speaker, String)>;

    fn session() -> Session<ScriptedSelector, RecordingOpener> {
        Session::new(
            "Nova",
            Lookups::default(),
            ScriptedSelector::new(vec![0]),
            RecordingOpener::default(),
        )
    }

    fn last_reply(lines: &Lines) -> &str {
        lines
            .iter()
            .rev()
            .find(|(speaker, _)| *speaker == Speaker::Assistant)
            .map(|(_, text)| text.as_str())
            .unwrap_or("")
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = session();
        let mut lines = Lines::new();
        assert_eq!(session.submit("   \t ", &mut lines), Outcome::Ignored);
        assert_eq!(session.submit("", &mut lines), Outcome::Ignored);
        assert!(lines.is_empty());
        assert_eq!(session.pending(), PendingTask::Idle);
    }

    #[test]
    fn test_input_is_echoed_trimmed() {
        let mut session = session();
        let mut lines = Lines::new();
        session.submit("  hello  ", &mut lines);
        assert_eq!(lines[0], (Speaker::User, "hello".to_string()));
        assert_eq!(lines[1].0, Speaker::Assistant);
        assert!(GREETINGS.contains(&lines[1].1.as_str()));
    }

    #[test]
    fn test_exit_ends_session() {
        let mut session = session();
        let mut lines = Lines::new();
        assert_eq!(session.submit("EXIT", &mut lines), Outcome::Ended);
        assert_eq!(last_reply(&lines), FAREWELL);
        assert!(!session.is_active());

        let shown = lines.len();
        assert_eq!(session.submit("hello", &mut lines), Outcome::Rejected);
        assert_eq!(session.submit("  ", &mut lines), Outcome::Rejected);
        assert_eq!(lines.len(), shown);
    }

    #[test]
    fn test_exit_wins_over_pending_task() {
        let mut session = session();
        let mut lines = Lines::new();
        session.submit("weather", &mut lines);
        assert_eq!(session.submit("exit", &mut lines), Outcome::Ended);
        assert!(session.opener().opened.is_empty());
    }

    #[test]
    fn test_weather_flow() {
        let mut session = session();
        let mut lines = Lines::new();

        session.submit("weather", &mut lines);
        assert_eq!(session.pending(), PendingTask::Weather);
        assert_eq!(last_reply(&lines), WEATHER_PROMPT);

        session.submit("yes", &mut lines);
        assert_eq!(session.pending(), PendingTask::WeatherCity);
        assert_eq!(last_reply(&lines), "Which city?");

        session.submit("Paris", &mut lines);
        assert_eq!(session.pending(), PendingTask::Idle);
        assert_eq!(last_reply(&lines), "Weather page opened!");
        assert_eq!(
            session.opener().opened,
            vec!["https://www.accuweather.com/en/search-locations?query=Paris"]
        );
    }

    #[test]
    fn test_time_flow() {
        let mut session = session();
        let mut lines = Lines::new();
        session.submit("what time is it?", &mut lines);
        assert_eq!(last_reply(&lines), TIME_PROMPT);
        session.submit("yes", &mut lines);
        session.submit("Buenos Aires", &mut lines);
        assert_eq!(last_reply(&lines), "Time page opened!");
        assert_eq!(session.opener().opened, vec!["https://time.is/Buenos+Aires"]);
        assert_eq!(session.pending(), PendingTask::Idle);
    }

    #[test]
    fn test_cancellation() {
        let mut session = session();
        let mut lines = Lines::new();
        session.submit("weather", &mut lines);
        session.submit("no", &mut lines);
        assert_eq!(last_reply(&lines), "Cancelled.");
        assert_eq!(session.pending(), PendingTask::Idle);
    }

    #[test]
    fn test_pending_task_takes_precedence_over_rules() {
        let mut session = session();
        let mut lines = Lines::new();
        session.submit("weather", &mut lines);
        session.submit("yes", &mut lines);
        // Looks like a joke request, but it is the city.
        session.submit("joke", &mut lines);
        assert_eq!(last_reply(&lines), "Weather page opened!");
        assert_eq!(
            session.opener().opened,
            vec!["https://www.accuweather.com/en/search-locations?query=joke"]
        );

        // "tell me a joke about the weather" does not contain "yes": cancelled.
        session.submit("weather", &mut lines);
        session.submit("tell me a joke about the weather", &mut lines);
        assert_eq!(last_reply(&lines), "Cancelled.");
    }

    #[test]
    fn test_open_failure_resets_task() {
        let mut session = Session::new(
            "Nova",
            Lookups::default(),
            ScriptedSelector::new(vec![0]),
            RecordingOpener::failing(),
        );
        let mut lines = Lines::new();
        session.submit("time", &mut lines);
        session.submit("yes", &mut lines);
        assert_eq!(session.submit("Tokyo", &mut lines), Outcome::Replied);
        assert_eq!(last_reply(&lines), "Couldn't open browser.");
        assert_eq!(session.pending(), PendingTask::Idle);
        assert!(session.is_active());
    }

    #[test]
    fn test_end_says_goodbye_once() {
        let mut session = session();
        let mut lines = Lines::new();
        session.end(&mut lines);
        session.end(&mut lines);
        assert_eq!(lines, vec![(Speaker::Assistant, FAREWELL.to_string())]);
        assert_eq!(session.submit("hi", &mut lines), Outcome::Rejected);
    }

    #[test]
    fn test_greet_uses_name() {
        let session = Session::new(
            "Vega",
            Lookups::default(),
            ScriptedSelector::new(vec![0]),
            RecordingOpener::default(),
        );
        let mut lines = Lines::new();
        session.greet(&mut lines);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].1, "Hello! I'm Vega, your virtual companion.");
        assert_eq!(session.name(), "Vega");
    }
}
