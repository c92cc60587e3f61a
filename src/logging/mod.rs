//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to
//! `<log_dir>/roster.log` (default: `~/.local/share/roster/logs/`) and only
//! when enabled in the config. With logging disabled no subscriber is
//! installed and the `tracing` macros are no-ops.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

const LOG_FILE: &str = "roster.log";

pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

/// Unknown level names fall back to `info`.
fn parse_level(level: &str) -> Level {
    level.parse().unwrap_or(Level::INFO)
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/var/log/roster"), PathBuf::from("/var/log/roster"));
        assert_eq!(expand_home("logs"), PathBuf::from("logs"));
    }

    #[test]
    fn test_disabled_logging_is_noop() {
        assert!(init(&LoggingConfig::default()).is_ok());
    }
}
