// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast settings, including loading and saving
//! them to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Default duration and tap behavior
//! - `[timing]` - Polling interval for the Iced tick subscription
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.dismiss_on_button = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::TickInterval;
use crate::error::{Error, Result};
use crate::queue::TapPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToasts";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast content and interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    /// Seconds a toast stays up when the caller does not say otherwise.
    /// Zero or negative keeps toasts up until dismissed.
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<i64>,

    /// Dismiss the current toast when its body is tapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_on_tap: Option<bool>,

    /// Dismiss the current toast when its action button is tapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_on_button: Option<bool>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
            dismiss_on_tap: Some(false),
            dismiss_on_button: Some(false),
        }
    }
}

impl ToastsConfig {
    /// Returns the tap policy these settings describe.
    #[must_use]
    pub fn tap_policy(&self) -> TapPolicy {
        TapPolicy {
            dismiss_on_tap: self.dismiss_on_tap.unwrap_or(false),
            dismiss_on_button: self.dismiss_on_button.unwrap_or(false),
        }
    }

    #[must_use]
    pub fn duration_secs(&self) -> i64 {
        self.default_duration_secs.unwrap_or(DEFAULT_TOAST_DURATION_SECS)
    }
}

/// Timing settings.
///
/// Read by Iced applications that own a [`ToastQueue`](crate::queue::ToastQueue)
/// and pass [`TimingConfig::tick_interval`] to
/// [`create_tick_subscription`](crate::app::subscription::create_tick_subscription).
/// A [`Toaster`](crate::app::Toaster) sleeps until each deadline and never
/// polls, so it ignores this section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Polling interval of the auto-dismiss tick (milliseconds).
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

impl TimingConfig {
    /// Returns the clamped polling interval.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        TickInterval::from(self.tick_interval_ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_secs() -> Option<i64> {
    Some(DEFAULT_TOAST_DURATION_SECS)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. `ICED_TOASTS_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
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
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "falling back to default settings"
                    );
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
