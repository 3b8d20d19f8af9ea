//! User configuration management
//!
//! Lives at `<app_dir>/config.toml`:
//!   - Linux: `$XDG_CONFIG_HOME/pomotask/` (defaults to `~/.config/pomotask/`)
//!   - elsewhere: `~/.pomotask/`

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "pomotask";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub pomodoro: PomodoroConfig,

    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Task document path; defaults to `Task_lists.json` in the app dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Keep a `.bak` copy of the previous document on save
    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            backup: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    #[serde(default = "default_break_minutes")]
    pub break_minutes: f64,

    #[serde(default = "default_cycles")]
    pub cycles: u32,

    /// Countdown refresh interval
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            break_minutes: default_break_minutes(),
            cycles: default_cycles(),
            tick_millis: default_tick_millis(),
            clear_screen: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Import the task file when the interactive menu starts
    #[serde(default)]
    pub import_on_start: bool,
}

fn default_true() -> bool {
    true
}

fn default_break_minutes() -> f64 {
    5.0
}

fn default_cycles() -> u32 {
    4
}

fn default_tick_millis() -> u64 {
    1000
}

pub fn get_app_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    let base = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
        .join(APP_DIR_NAME);

    #[cfg(not(target_os = "linux"))]
    let base = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
        .join(format!(".{}", APP_DIR_NAME));

    Ok(base)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
