//! # Nova Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for Nova, handling loading,
//! merging, and validation of configuration data. Everything has a default, so
//! Nova runs without any configuration file at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` (or `NOVA_CONFIG`). When present,
//!    no other file is consulted.
//! 2. Project-specific `.nova.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Nova"
//!
//! [browser]
//! enabled = true
//! weather_url = "https://www.accuweather.com/en/search-locations?query="
//! time_url = "https://time.is/"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! println!("Talking to {}", cfg.assistant.name);
//! ```
//!
use crate::core::error::{NovaError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// How the assistant presents itself.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Display name used in the banner, the line prefix, and the identity reply.
    #[serde(default = "default_assistant_name")]
    pub name: String,
}

/// Settings for the weather and time lookups.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BrowserConfig {
    /// When false, lookup URLs are printed instead of opened.
    #[serde(default = "default_browser_enabled")]
    pub enabled: bool,
    /// Prefix the encoded city is appended to.
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
    /// Prefix the encoded place is appended to.
    #[serde(default = "default_time_url")]
    pub time_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            enabled: default_browser_enabled(),
            weather_url: default_weather_url(),
            time_url: default_time_url(),
        }
    }
}

fn default_assistant_name() -> String {
    "Nova".to_string()
}
fn default_browser_enabled() -> bool {
    true
}
fn default_weather_url() -> String {
    "https://www.accuweather.com/en/search-locations?query=".to_string()
}
fn default_time_url() -> String {
    "https://time.is/".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".nova.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, that single file is read (after `~` expansion) and it
/// must exist. Otherwise the user and project files are merged over defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = expand_path(path);
            if !expanded.is_file() {
                return Err(anyhow!(NovaError::Config(format!(
                    "Config file '{}' does not exist or is not a file.",
                    expanded.display()
                ))));
            }
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Nova", "nova") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.nova.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` up to the filesystem root looking for `.nova.toml`,
/// giving up at the first directory that holds a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.assistant.name = if project_cfg.assistant.name != default_assistant_name() {
        project_cfg.assistant.name
    } else {
        user.assistant.name
    };
    merged.browser.enabled = if project_cfg.browser.enabled != default_browser_enabled() {
        project_cfg.browser.enabled
    } else {
        user.browser.enabled
    };
    merged.browser.weather_url = if project_cfg.browser.weather_url != default_weather_url() {
        project_cfg.browser.weather_url
    } else {
        user.browser.weather_url
    };
    merged.browser.time_url = if project_cfg.browser.time_url != default_time_url() {
        project_cfg.browser.time_url
    } else {
        user.browser.time_url
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.assistant.name.trim().is_empty() {
        return Err(anyhow!(NovaError::Config(
            "Assistant name cannot be empty.".to_string()
        )));
    }
    for (key, url) in [
        ("browser.weather_url", &config.browser.weather_url),
        ("browser.time_url", &config.browser.time_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!(NovaError::Config(format!(
                "Invalid {} '{}'. Expected an http:// or https:// URL.",
                key, url
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
