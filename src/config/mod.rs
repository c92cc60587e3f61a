pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster")
        .join("config.toml")
}

/// A loaded config, and whether it came from defaults because no file
/// existed yet.
pub struct LoadedConfig {
    pub config: AppConfig,
    pub first_run: bool,
}

pub fn load_config() -> Result<LoadedConfig> {
    load_from(&config_path())
}

fn load_from(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: AppConfig::default(),
            first_run: true,
        });
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(LoadedConfig {
        config,
        first_run: false,
    })
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_to(&config_path(), config)
}

fn save_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}
