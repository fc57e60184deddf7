//! # Reply Engine
//!
//! File: cli/src/bot/reply.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Produces exactly one reply for an input when no task is pending. The input
//! is lowercased and checked against `RULES` from top to bottom; the first rule
//! with a keyword contained in the input wins, and nothing after it is looked
//! at. Matching is plain substring containment, so "this" counts as "hi".
//!
//! After the keyword rules comes arithmetic, then a random "didn't understand".
//!
//! Two rules also start a pending task (weather and time), which is why
//! `generate_reply` takes the session's task by mutable reference.
//!
use super::arithmetic;
use super::select::{pick_uniform, Selector};
use super::task::PendingTask;
use tracing::debug;

pub const GREETINGS: [&str; 4] = ["Hello!", "Hey there!", "Hi human!", "Greetings!"];

pub const JOKES: [&str; 3] = [
    "Why was the computer cold? It forgot to close its windows!",
    "Why do coders prefer dark mode? Light attracts bugs!",
    "What do you call a singing laptop? A Dell!",
];

pub const FALLBACKS: [&str; 3] = [
    "Hmm, not sure I understood.",
    "Can you rephrase that?",
    "I didn't get that, try again?",
];

pub const STATUS_REPLY: &str = "I am functioning within normal parameters. :)";
pub const WEATHER_PROMPT: &str = "Want me to open a weather website for you? (yes/no)";
pub const TIME_PROMPT: &str = "Should I fetch the time from the website? (yes/no)";
pub const MATHS_HINT: &str = "I only do simple maths! Try something like 5+3.";

/// What a matching rule answers with.
#[derive(Debug, Clone, Copy)]
enum Response {
    Pool(&'static [&'static str]),
    Fixed(&'static str),
    /// "I'm <name>. ...", formatted with the configured assistant name.
    Identity,
    /// Sets the pending task and asks the yes/no question.
    Ask(PendingTask, &'static str),
}

#[derive(Debug)]
struct ReplyRule {
    name: &'static str,
    keywords: &'static [&'static str],
    response: Response,
}

const RULES: &[ReplyRule] = &[
    ReplyRule {
        name: "greeting",
        keywords: &["hi", "hello", "hey"],
        response: Response::Pool(&GREETINGS),
    },
    ReplyRule {
        name: "identity",
        keywords: &["your name"],
        response: Response::Identity,
    },
    ReplyRule {
        name: "status",
        keywords: &["how are you"],
        response: Response::Fixed(STATUS_REPLY),
    },
    ReplyRule {
        name: "joke",
        keywords: &["joke"],
        response: Response::Pool(&JOKES),
    },
    ReplyRule {
        name: "weather",
        keywords: &["weather"],
        response: Response::Ask(PendingTask::Weather, WEATHER_PROMPT),
    },
    ReplyRule {
        name: "time",
        keywords: &["time"],
        response: Response::Ask(PendingTask::Time, TIME_PROMPT),
    },
];

/// The identity reply for an assistant called `name`.
pub fn identity_reply(name: &str) -> String {
    format!("I'm {}. Your friendly AI buddy.", name)
}

/// True when some character, a digit, and another character appear in a row.
///
/// Deliberately loose: a lone "7" does not trigger it, "room 101" does.
pub fn looks_like_arithmetic(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.windows(3).any(|w| w[1].is_ascii_digit())
}

/// Generates the reply to `input`, possibly setting `task`.
pub fn generate_reply<S>(
    input: &str,
    assistant_name: &str,
    task: &mut PendingTask,
    selector: &mut S,
) -> String
where
    S: Selector + ?Sized,
{
    let text = input.to_lowercase();

    if let Some(rule) = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| text.contains(*k)))
    {
        debug!("Reply rule '{}' matched", rule.name);
        return match rule.response {
            Response::Pool(pool) => pick(selector, pool),
            Response::Fixed(reply) => reply.to_string(),
            Response::Identity => identity_reply(assistant_name),
            Response::Ask(next, prompt) => {
                debug!("Pending task set to {:?}", next);
                *task = next;
                prompt.to_string()
            }
        };
    }

    if looks_like_arithmetic(&text) {
        debug!("Input looks like arithmetic");
        return match arithmetic::evaluate(&text) {
            Ok(answer) => answer,
            Err(e) => {
                debug!("{}", e);
                MATHS_HINT.to_string()
            }
        };
    }

    debug!("No rule matched, using fallback");
    pick(selector, &FALLBACKS)
}

fn pick<S: Selector + ?Sized>(selector: &mut S, pool: &[&str]) -> String {
    pick_uniform(selector, pool)
        .map(|reply| reply.to_string())
        .unwrap_or_default()
}
