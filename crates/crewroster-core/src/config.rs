//! Configuration types for crewroster.
//!
//! [`Config::load`] reads `~/.config/crewroster/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests). The source text rarely encodes its own year/month, so the assumed
//! month lives here and is supplied once per extraction.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[schedule]
year  = 2026
month = 1
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/crewroster/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// `[schedule]` section of `config.toml`: the year/month every detected
/// day-of-month is placed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_month")]
    pub month: u32,
}

fn default_year() -> i32 { 2026 }
fn default_month() -> u32 { 1 }

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            month: default_month(),
        }
    }
}

/// Errors raised while validating configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("month must be in 1..=12, got {0}")]
    MonthOutOfRange(u32),
}

impl ScheduleConfig {
    /// Build a validated config. The extraction engine assumes `month` is a
    /// real month; everything else about dates stays unvalidated by design.
    pub fn new(year: i32, month: u32) -> Result<Self, ConfigError> {
        let config = Self { year, month };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants on values that may have come from a config file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=12).contains(&self.month) {
            return Err(ConfigError::MonthOutOfRange(self.month));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/crewroster/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()?;
        config.schedule.validate()?;
        Ok(config)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("crewroster")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
