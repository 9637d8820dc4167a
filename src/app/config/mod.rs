// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[motion]` - Reduced-motion preference
//! - `[promo]` - Promotional notification timing and dismissal lifetime
//! - `[forms]` - Submission latency and transient feedback windows
//! - `[scroll]` - Floating call-to-action threshold
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SKYWAY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use skyway::config;
//!
//! // Defaults plus a warning when the file exists but cannot be parsed
//! let (config, warning) = config::load_with_override(None);
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! assert!(config.scroll.cta_threshold() >= 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

pub const CONFIG_LOAD_WARNING: &str = "Settings could not be read; defaults are in use.";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Motion preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MotionConfig {
    /// Suppress entrance animations; content is shown immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

/// Promotional notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoConfig {
    #[serde(
        default = "default_promo_show_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_delay_ms: Option<u64>,

    #[serde(
        default = "default_promo_auto_hide_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_hide_ms: Option<u64>,

    #[serde(
        default = "default_dismissal_ttl_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismissal_ttl_hours: Option<u64>,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: default_promo_show_delay_ms(),
            auto_hide_ms: default_promo_auto_hide_ms(),
            dismissal_ttl_hours: default_dismissal_ttl_hours(),
        }
    }
}

impl PromoConfig {
    #[must_use]
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms.unwrap_or(DEFAULT_PROMO_SHOW_DELAY_MS))
    }

    #[must_use]
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms.unwrap_or(DEFAULT_PROMO_AUTO_HIDE_MS))
    }

    #[must_use]
    pub fn dismissal_ttl(&self) -> Duration {
        let hours = self
            .dismissal_ttl_hours
            .unwrap_or(DEFAULT_DISMISSAL_TTL_HOURS);
        Duration::from_secs(hours.saturating_mul(60 * 60))
    }
}

/// Form feedback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormsConfig {
    #[serde(
        default = "default_search_latency_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_latency_ms: Option<u64>,

    #[serde(
        default = "default_newsletter_confirmation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub newsletter_confirmation_ms: Option<u64>,

    #[serde(
        default = "default_swap_reset_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub swap_reset_ms: Option<u64>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            search_latency_ms: default_search_latency_ms(),
            newsletter_confirmation_ms: default_newsletter_confirmation_ms(),
            swap_reset_ms: default_swap_reset_ms(),
        }
    }
}

impl FormsConfig {
    #[must_use]
    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms.unwrap_or(DEFAULT_SEARCH_LATENCY_MS))
    }

    #[must_use]
    pub fn newsletter_confirmation(&self) -> Duration {
        Duration::from_millis(
            self.newsletter_confirmation_ms
                .unwrap_or(DEFAULT_NEWSLETTER_CONFIRMATION_MS),
        )
    }

    #[must_use]
    pub fn swap_reset(&self) -> Duration {
        Duration::from_millis(self.swap_reset_ms.unwrap_or(DEFAULT_SWAP_RESET_MS))
    }
}

/// Scroll reactor settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Offset at which the floating call-to-action becomes visible.
    #[serde(
        default = "default_cta_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub cta_threshold: Option<f32>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            cta_threshold: default_cta_threshold(),
        }
    }
}

impl ScrollConfig {
    /// Threshold clamped to `0..=MAX_CTA_THRESHOLD`.
    #[must_use]
    pub fn cta_threshold(&self) -> f32 {
        self.cta_threshold
            .unwrap_or(DEFAULT_CTA_THRESHOLD)
            .clamp(0.0, MAX_CTA_THRESHOLD)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub motion: MotionConfig,

    #[serde(default)]
    pub promo: PromoConfig,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_promo_show_delay_ms() -> Option<u64> {
    Some(DEFAULT_PROMO_SHOW_DELAY_MS)
}

fn default_promo_auto_hide_ms() -> Option<u64> {
    Some(DEFAULT_PROMO_AUTO_HIDE_MS)
}

fn default_dismissal_ttl_hours() -> Option<u64> {
    Some(DEFAULT_DISMISSAL_TTL_HOURS)
}

fn default_search_latency_ms() -> Option<u64> {
    Some(DEFAULT_SEARCH_LATENCY_MS)
}

fn default_newsletter_confirmation_ms() -> Option<u64> {
    Some(DEFAULT_NEWSLETTER_CONFIRMATION_MS)
}

fn default_swap_reset_ms() -> Option<u64> {
    Some(DEFAULT_SWAP_RESET_MS)
}

fn default_cta_threshold() -> Option<f32> {
    Some(DEFAULT_CTA_THRESHOLD)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from a custom directory, or the default one.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(%error, path = %path.display(), "settings ignored");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.motion.reduced_motion, None);
        assert_eq!(config.promo.show_delay(), Duration::from_secs(20));
        assert_eq!(config.promo.auto_hide(), Duration::from_secs(8));
        assert_eq!(config.promo.dismissal_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.forms.search_latency(), Duration::from_millis(1_500));
        assert_eq!(
            config.forms.newsletter_confirmation(),
            Duration::from_secs(3)
        );
        assert_eq!(config.forms.swap_reset(), Duration::from_millis(300));
        assert!((config.scroll.cta_threshold() - 300.0).abs() < f32::EPSILON);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            motion: MotionConfig {
                reduced_motion: Some(true),
            },
            promo: PromoConfig {
                show_delay_ms: Some(1_000),
                ..PromoConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[scroll]\ncta_threshold = 120.0\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert!((loaded.scroll.cta_threshold() - 120.0).abs() < f32::EPSILON);
        assert_eq!(loaded.promo, PromoConfig::default());
    }

    #[test]
    fn broken_file_yields_defaults_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[promo\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn settings_written_to_config_dir_are_loaded_from_it() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.promo.auto_hide_ms = Some(2_000);

        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn cta_threshold_is_clamped() {
        let scroll = ScrollConfig {
            cta_threshold: Some(-5.0),
        };
        assert!(scroll.cta_threshold().abs() < f32::EPSILON);
    }
}
