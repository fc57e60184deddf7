//! # Pending Tasks
//!
//! File: cli/src/bot/task.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Some replies ask a question ("Want me to open a weather website?"). The
//! answer to that question must not go through the normal reply rules, so the
//! session remembers what it is waiting for in a `PendingTask`.
//!
//! ## Transitions
//!
//! ```text
//! Idle -> Weather -> WeatherCity -> Idle
//! Idle -> Time    -> TimeZone    -> Idle
//! ```
//!
//! `Weather` and `Time` wait for a yes/no answer; anything without "yes" in it
//! cancels. `WeatherCity` and `TimeZone` take the input as a place name, open
//! the lookup page for it, and return to `Idle` whether or not that worked.
//!
use crate::common::browser::{lookup_uri, UriOpener};
use crate::core::config::BrowserConfig;
use tracing::{debug, info, warn};

/// What the next input is expected to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingTask {
    /// Nothing pending; input goes to the reply engine.
    #[default]
    Idle,
    /// Waiting for yes/no on opening the weather site.
    Weather,
    /// Waiting for the city to look up.
    WeatherCity,
    /// Waiting for yes/no on opening the time site.
    Time,
    /// Waiting for the city or country to look up.
    TimeZone,
}

impl PendingTask {
    pub fn is_idle(self) -> bool {
        self == PendingTask::Idle
    }
}

/// Base URLs the lookup tasks append the encoded place name to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookups {
    pub weather_url: String,
    pub time_url: String,
}

impl From<&BrowserConfig> for Lookups {
    fn from(browser: &BrowserConfig) -> Self {
        Self {
            weather_url: browser.weather_url.clone(),
            time_url: browser.time_url.clone(),
        }
    }
}

impl Default for Lookups {
    fn default() -> Self {
        Lookups::from(&BrowserConfig::default())
    }
}

/// Result of feeding one input to a pending task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStep {
    pub next: PendingTask,
    pub reply: Option<String>,
}

impl TaskStep {
    fn to(next: PendingTask, reply: &str) -> Self {
        Self {
            next,
            reply: Some(reply.to_string()),
        }
    }
}

/// Feeds `input` to `task` and returns the next state and what to say.
pub fn advance<O>(task: PendingTask, input: &str, lookups: &Lookups, opener: &mut O) -> TaskStep
where
    O: UriOpener + ?Sized,
{
    debug!("Advancing pending task {:?}", task);
    match task {
        PendingTask::Idle => TaskStep {
            next: PendingTask::Idle,
            reply: None,
        },
        PendingTask::Weather => confirm(input, PendingTask::WeatherCity, "Which city?"),
        PendingTask::Time => confirm(input, PendingTask::TimeZone, "Which city/country?"),
        PendingTask::WeatherCity => {
            let uri = lookup_uri(&lookups.weather_url, input);
            open_lookup(opener, &uri, "Weather page opened!")
        }
        PendingTask::TimeZone => {
            let uri = lookup_uri(&lookups.time_url, input);
            open_lookup(opener, &uri, "Time page opened!")
        }
    }
}

fn confirm(input: &str, on_yes: PendingTask, prompt: &str) -> TaskStep {
    if input.to_lowercase().contains("yes") {
        TaskStep::to(on_yes, prompt)
    } else {
        TaskStep::to(PendingTask::Idle, "Cancelled.")
    }
}

fn open_lookup<O>(opener: &mut O, uri: &str, success: &str) -> TaskStep
where
    O: UriOpener + ?Sized,
{
    info!("Opening lookup page: {}", uri);
    match opener.open(uri) {
        Ok(()) => TaskStep::to(PendingTask::Idle, success),
        Err(e) => {
            warn!("{}", e);
            TaskStep::to(PendingTask::Idle, "Couldn't open browser.")
        }
    }
}
