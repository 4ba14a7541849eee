//! File-backed `tracing` subscriber.
//!
//! The terminal belongs to the TUI, so events are written to a log file
//! under the XDG state directory instead of stderr.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;
use crate::error::{VinylError, VinylResult};

/// Install the global subscriber. Returns the file being written to, or
/// `None` when logging is disabled.
pub fn init(settings: &LogSettings) -> VinylResult<Option<PathBuf>> {
    if !settings.enabled {
        return Ok(None);
    }

    let path = settings
        .file
        .clone()
        .or_else(default_log_path)
        .ok_or_else(|| VinylError::logging("no log file configured and HOME is not set"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = env_filter(&settings.filter)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| VinylError::logging(e.to_string()))?;

    Ok(Some(path))
}

/// `RUST_LOG` wins over the configured directive.
fn env_filter(fallback: &str) -> VinylResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback).map_err(|e| VinylError::logging(e.to_string())),
    }
}

/// `$XDG_STATE_HOME/vinyl/vinyl.log`, or `~/.local/state/vinyl/vinyl.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("vinyl").join("vinyl.log"))
}
