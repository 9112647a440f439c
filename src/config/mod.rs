// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Default duration and zone for new toasts
//! - `[timing]` - Countdown clock period
//!
//! The 300 ms close grace interval is fixed and cannot be configured.
//!
//! # Examples
//!
//! ```no_run
//! use toastkit::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.default_duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::toast::{TickInterval, ToastDuration, Zone};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Defaults applied to toasts shown without explicit parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    /// Display duration in milliseconds; `0` keeps toasts until dismissed.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Zone identifier (e.g. "top-right", "bottom-center").
    #[serde(
        default = "default_zone",
        with = "zone_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_zone: Option<Zone>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            default_zone: default_zone(),
        }
    }
}

/// Countdown clock settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Period of the countdown tick in milliseconds (1–1000).
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Default toast duration, falling back to the built-in default.
    #[must_use]
    pub fn default_duration(&self) -> ToastDuration {
        self.toasts
            .default_duration_ms
            .map_or_else(ToastDuration::default, ToastDuration::from_millis)
    }

    /// Default toast zone, falling back to the built-in default.
    #[must_use]
    pub fn default_zone(&self) -> Zone {
        self.toasts.default_zone.unwrap_or_default()
    }

    /// Tick interval, clamped to its valid range.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.timing
            .tick_interval_ms
            .map_or_else(TickInterval::default, TickInterval::new)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_zone() -> Option<Zone> {
    DEFAULT_TOAST_ZONE.parse().ok()
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

/// Zones are stored by their contractual identifier.
mod zone_format {
    use crate::domain::toast::Zone;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(zone: &Option<Zone>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match zone {
            Some(zone) => serializer.serialize_str(zone.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Zone>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        raw.parse::<Zone>()
            .map(Some)
            .map_err(|err| D::Error::custom(format!("invalid default_zone: {}", err.0)))
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), "falling back to default config: {err}");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
