//! # Nova CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives `nova chat` with piped stdin. With stdin not being a terminal the
//! command echoes every input line as `You: ...`, so stdout is a complete
//! transcript that can be checked line by line.
//!
//! All tests pass `--no-browser`, which prints lookup URLs instead of opening
//! them.
//!

mod common;
use common::*;
use predicates::prelude::*;

fn chat_transcript(input: &str) -> String {
    let (mut cmd, _dir) = nova_cmd();
    let assert = cmd
        .args(["chat", "--no-browser"])
        .write_stdin(input)
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn test_chat_banner_and_farewell() {
    let (mut cmd, _dir) = nova_cmd();
    cmd.args(["chat", "--no-browser"])
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Nova: Hello! I'm Nova, your virtual companion.",
        ))
        .stdout(predicate::str::contains(
            "Nova: Ask me jokes, weather, time, or simple maths!",
        ))
        .stdout(predicate::str::contains("You: exit"))
        .stdout(predicate::str::contains(
            "Nova: Goodbye human! Turning off my circuits...",
        ));
}

#[test]
fn test_chat_weather_flow() {
    let out = chat_transcript("weather\nyes\nParis\nexit\n");
    let expected_order = [
        "You: weather",
        "Nova: Want me to open a weather website for you? (yes/no)",
        "You: yes",
        "Nova: Which city?",
        "You: Paris",
        "Browser disabled, would open: https://www.accuweather.com/en/search-locations?query=Paris",
        "Nova: Weather page opened!",
        "Nova: Goodbye human!",
    ];
    let mut from = 0;
    for line in expected_order {
        let found = out[from..]
            .find(line)
            .unwrap_or_else(|| panic!("'{}' missing or out of order in:\n{}", line, out));
        from += found + line.len();
    }
}

#[test]
fn test_chat_time_cancelled() {
    let out = chat_transcript("time\nnope\nexit\n");
    assert!(out.contains("Nova: Should I fetch the time from the website? (yes/no)"));
    assert!(out.contains("Nova: Cancelled."));
    assert!(!out.contains("would open"));
}

#[test]
fn test_chat_arithmetic() {
    let out = chat_transcript("what is 6*7\n10-20\nwhat is 9/0\nwhat is 9/2\nexit\n");
    assert!(out.contains("Nova: Answer: 42"));
    assert!(out.contains("Nova: Answer: -10"));
    assert!(out.contains("Nova: Division by zero? Nope!"));
    assert!(out.contains("Nova: Answer: 4.5"));
}

#[test]
fn test_chat_blank_lines_are_ignored() {
    let out = chat_transcript("\n   \nexit\n");
    assert_eq!(out.matches("You:").count(), 1);
    assert!(out.contains("You: exit"));
}

#[test]
fn test_chat_stops_reading_after_exit() {
    let out = chat_transcript("EXIT\nhello\n");
    assert!(out.contains("Nova: Goodbye human!"));
    assert!(!out.contains("You: hello"));
}

#[test]
fn test_chat_ends_quietly_at_end_of_input() {
    let out = chat_transcript("hello\n");
    assert!(out.contains("You: hello"));
    assert!(GREETINGS.iter().any(|g| out.contains(&format!("Nova: {}", g))));
    assert!(!out.contains("Goodbye"));
}

#[test]
fn test_chat_fallback_stays_in_pool() {
    let out = chat_transcript("blorp\nexit\n");
    assert!(FALLBACKS.iter().any(|f| out.contains(&format!("Nova: {}", f))));
}

#[test]
fn test_chat_uses_configured_name() {
    let (mut cmd, dir) = nova_cmd();
    let path = write_config(&dir, "[assistant]\nname = \"Vega\"\n");
    cmd.arg("--config")
        .arg(&path)
        .args(["chat", "--no-browser"])
        .write_stdin("what is your name\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vega: Hello! I'm Vega, your virtual companion.",
        ))
        .stdout(predicate::str::contains(
            "Vega: I'm Vega. Your friendly AI buddy.",
        ));
}

#[test]
fn test_chat_browser_disabled_in_config() {
    let (mut cmd, dir) = nova_cmd();
    let path = write_config(
        &dir,
        "[browser]\nenabled = false\ntime_url = \"https://time.example/\"\n",
    );
    cmd.arg("--config")
        .arg(&path)
        .arg("chat")
        .write_stdin("time\nyes\nOslo\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Browser disabled, would open: https://time.example/Oslo",
        ))
        .stdout(predicate::str::contains("Nova: Time page opened!"));
}
