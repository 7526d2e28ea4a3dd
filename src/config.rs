// src/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;
use thiserror::Error;

use crate::generators::{DEFAULT_MAX_WORDS, DEFAULT_OUTPUT_FILE};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

// Runtime configuration, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    // Wordlist Generation
    pub wordlist_output: PathBuf,
    pub wordlist_max: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,

    /// Values that were present but could not be used.
    pub rejected: Vec<ConfigError>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            wordlist_max: DEFAULT_MAX_WORDS,
            log_level: LevelFilter::Info,
            log_file: crate::utils::get_app_data_dir()
                .map(|dir| dir.join("logs").join("passaudit.log"))
                .unwrap_or_else(|| PathBuf::from("./logs/passaudit.log")),
            rejected: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, keeping defaults for
    /// missing or invalid values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Wordlist Generation
        if let Some(path) = lookup("WORDLIST_OUTPUT").filter(|p| !p.trim().is_empty()) {
            config.wordlist_output = PathBuf::from(path.trim());
        }

        if let Some(val) = lookup("WORDLIST_MAX") {
            match parse_value::<usize>("WORDLIST_MAX", &val) {
                Ok(max) => config.wordlist_max = max,
                Err(e) => config.rejected.push(e),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_value::<LevelFilter>("LOG_LEVEL", &level) {
                Ok(level) => config.log_level = level,
                Err(e) => config.rejected.push(e),
            }
        }

        if let Some(file) = lookup("LOG_FILE").filter(|f| !f.trim().is_empty()) {
            config.log_file = PathBuf::from(file.trim());
        }

        config
    }

    /// Report rejected values once logging is available.
    pub fn log_rejected(&self) {
        for rejected in &self.rejected {
            log::warn!("{}, using default", rejected);
        }
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
