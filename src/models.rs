// src/models.rs
use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::{CharacterComposition, StrengthLabel};

/// Raw payload returned by a strength estimator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Estimate {
    pub score: u8,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub crack_time_display: String,
}

/// Combined estimator and entropy result for one password.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub length: usize,
    pub score: u8,
    pub label: StrengthLabel,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub crack_time_display: String,
    pub entropy_bits: f64,
    pub composition: CharacterComposition,
}

// Wordlist generation options
#[derive(Debug, Clone, PartialEq)]
pub struct WordlistOptions {
    pub output: PathBuf,
    pub max_words: usize,
}

impl Default for WordlistOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(crate::generators::DEFAULT_OUTPUT_FILE),
            max_words: crate::generators::DEFAULT_MAX_WORDS,
        }
    }
}

/// Outcome of one wordlist generation run.
#[derive(Debug, Clone, Serialize)]
pub struct WordlistSummary {
    pub count: usize,
    pub output: PathBuf,
    pub size_bytes: u64,
    pub generated_at: DateTime<Utc>,
}
