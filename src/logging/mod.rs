// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use chrono::Utc;
use thiserror::Error;

use crate::config::Config;

/// Log files larger than this are rotated at startup.
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;
/// Rotated files kept next to the active log.
const MAX_ROTATED_LOGS: usize = 4;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Log rotation error: {0}")]
    RotationError(String),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install env_logger, writing to the configured log file.
///
/// Falls back to stderr when the file cannot be prepared so a broken log
/// location never stops the tool.
pub fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    let file_error = match open_log_file(&config.log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            None
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr);
            Some(e)
        }
    };

    if builder.try_init().is_err() {
        return;
    }

    if let Some(e) = file_error {
        log::warn!("Logging to stderr, cannot use {}: {}", config.log_file.display(), e);
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    if path.exists() && fs::metadata(path)?.len() > MAX_LOG_SIZE {
        rotate_log(path)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

// Move the active log aside and prune old rotations
fn rotate_log(path: &Path) -> Result<PathBuf> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LoggingError::RotationError(format!("invalid log file name: {}", path.display())))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let rotated = dir.join(format!("{}-{}.log", stem, timestamp));
    fs::rename(path, &rotated)?;

    cleanup_rotated_logs(dir, stem, MAX_ROTATED_LOGS)?;
    Ok(rotated)
}

fn cleanup_rotated_logs(dir: &Path, stem: &str, keep: usize) -> Result<()> {
    let prefix = format!("{}-", stem);
    let mut rotated: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path.extension().map_or(false, |ext| ext == "log")
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map_or(false, |n| n.starts_with(&prefix))
        })
        .collect();

    // Timestamped names sort chronologically; newest first
    rotated.sort();
    rotated.reverse();

    for old in rotated.iter().skip(keep) {
        fs::remove_file(old)?;
    }

    Ok(())
}
