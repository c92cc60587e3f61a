//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the client starts without a config file.

use crate::store::model::Employee;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Records served by the `memory` backend.
    #[serde(default)]
    pub seed: Vec<Employee>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Http,
    Memory,
}

/// Where employee records come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    /// Base URL of the employee service; `/employees` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI appearance and timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// How long the status-bar flash message stays up.
    #[serde(default = "default_flash_secs")]
    pub flash_secs: u64,
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            flash_secs: default_flash_secs(),
            tick_millis: default_tick_millis(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_backend() -> Backend {
    Backend::Http
}
fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_flash_secs() -> u64 {
    3
}
fn default_tick_millis() -> u64 {
    50 // 20 FPS
}
fn default_log_dir() -> String {
    "~/.local/share/roster/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
