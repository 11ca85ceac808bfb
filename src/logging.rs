//! `tracing` setup.
//!
//! The terminal belongs to the UI, so events go to the configured log file
//! only. Without `logging.file` no subscriber is installed.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{PlayerError, Result};

/// Environment variable that overrides `logging.level`.
pub const LOG_ENV: &str = "JUKEBAR_LOG";

/// Install the global subscriber. Returns whether logging is active.
pub fn init(settings: &LoggingSettings) -> Result<bool> {
    let Some(path) = settings.file.as_ref() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| PlayerError::Logging(e.to_string()))?;

    Ok(true)
}

fn filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
