// SPDX-License-Identifier: MPL-2.0
//! This module reads user preferences from a `settings.toml` file. The app
//! never writes it back; users edit it by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[motion]` - Motion source, sampling interval, pointer tilt range, trace file
//! - `[animation]` - Interactive spring applied to the displayed tilt
//! - `[card]` - Optional replacement artwork
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PARALLAX_CARD_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use parallax_card::config::{self, MotionSourceKind};
//!
//! let (config, _warning) = config::load();
//! let source = config.motion.source.unwrap_or(MotionSourceKind::Pointer);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Where attitude readings come from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MotionSourceKind {
    /// Cursor position over the window stands in for device tilt.
    #[default]
    Pointer,
    /// Deterministic sweep, no input required.
    Simulated,
    /// Replays a recorded TOML trace.
    Trace,
    /// No sensor: the card stays at rest.
    #[serde(rename = "none", alias = "disabled")]
    Disabled,
}

impl FromStr for MotionSourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pointer" => Ok(Self::Pointer),
            "simulated" => Ok(Self::Simulated),
            "trace" => Ok(Self::Trace),
            "none" | "disabled" => Ok(Self::Disabled),
            other => Err(format!("unknown motion source: {other}")),
        }
    }
}

impl fmt::Display for MotionSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pointer => "pointer",
            Self::Simulated => "simulated",
            Self::Trace => "trace",
            Self::Disabled => "none",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Motion input settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Which adapter feeds attitude readings.
    #[serde(default)]
    pub source: Option<MotionSourceKind>,

    /// Interval between readings in milliseconds.
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: Option<u64>,

    /// Trace file replayed by the `trace` source.
    #[serde(default)]
    pub trace_path: Option<PathBuf>,

    /// Tilt reached at the window edge by the `pointer` source (radians).
    #[serde(default = "default_pointer_max_tilt")]
    pub pointer_max_tilt: Option<f64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            source: Some(MotionSourceKind::default()),
            update_interval_ms: default_update_interval_ms(),
            trace_path: None,
            pointer_max_tilt: default_pointer_max_tilt(),
        }
    }
}

impl MotionConfig {
    /// Sampling interval, clamped to the supported range.
    #[must_use]
    pub fn update_interval(&self) -> Duration {
        let ms = self
            .update_interval_ms
            .unwrap_or(DEFAULT_UPDATE_INTERVAL_MS)
            .clamp(MIN_UPDATE_INTERVAL_MS, MAX_UPDATE_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Pointer tilt range, clamped to the supported range.
    #[must_use]
    pub fn pointer_max_tilt(&self) -> f64 {
        finite_or(self.pointer_max_tilt, DEFAULT_POINTER_MAX_TILT).clamp(
            MIN_POINTER_MAX_TILT,
            MAX_POINTER_MAX_TILT,
        )
    }
}

/// `value` if set and finite, else `default`. TOML accepts `nan` and `inf`,
/// which `clamp` would pass through.
fn finite_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

/// Spring animation applied to the displayed tilt.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Whether the displayed tilt eases toward each new sample.
    #[serde(default = "default_spring")]
    pub spring: Option<bool>,

    /// Spring response in seconds.
    #[serde(default = "default_response_secs")]
    pub response_secs: Option<f64>,

    /// Spring damping ratio.
    #[serde(default = "default_damping_fraction")]
    pub damping_fraction: Option<f64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spring: default_spring(),
            response_secs: default_response_secs(),
            damping_fraction: default_damping_fraction(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn spring_enabled(&self) -> bool {
        self.spring.unwrap_or(true)
    }

    #[must_use]
    pub fn response_secs(&self) -> f64 {
        finite_or(self.response_secs, DEFAULT_SPRING_RESPONSE_SECS).clamp(
            MIN_SPRING_RESPONSE_SECS,
            MAX_SPRING_RESPONSE_SECS,
        )
    }

    #[must_use]
    pub fn damping_fraction(&self) -> f64 {
        finite_or(self.damping_fraction, DEFAULT_SPRING_DAMPING).clamp(
            MIN_SPRING_DAMPING,
            MAX_SPRING_DAMPING,
        )
    }
}

/// Replacement artwork. Unset entries use the bundled images.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct CardConfig {
    #[serde(default)]
    pub card_image: Option<PathBuf>,

    #[serde(default)]
    pub avatar_image: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub motion: MotionConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub card: CardConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_update_interval_ms() -> Option<u64> {
    Some(DEFAULT_UPDATE_INTERVAL_MS)
}

fn default_pointer_max_tilt() -> Option<f64> {
    Some(DEFAULT_POINTER_MAX_TILT)
}

fn default_spring() -> Option<bool> {
    Some(true)
}

fn default_response_secs() -> Option<f64> {
    Some(DEFAULT_SPRING_RESPONSE_SECS)
}

fn default_damping_fraction() -> Option<f64> {
    Some(DEFAULT_SPRING_DAMPING)
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
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use crate::error::Error;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"

[motion]
source = "trace"
update_interval_ms = 33
trace_path = "/tmp/trace.toml"
pointer_max_tilt = 0.8

[animation]
spring = false
response_secs = 0.3
damping_fraction = 1.0

[card]
card_image = "card.png"
"#,
        )
        .expect("failed to write file");

        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            motion: MotionConfig {
                source: Some(MotionSourceKind::Trace),
                update_interval_ms: Some(33),
                trace_path: Some(PathBuf::from("/tmp/trace.toml")),
                pointer_max_tilt: Some(0.8),
            },
            animation: AnimationConfig {
                spring: Some(false),
                response_secs: Some(0.3),
                damping_fraction: Some(1.0),
            },
            card: CardConfig {
                card_image: Some(PathBuf::from("card.png")),
                avatar_image: None,
            },
        };
        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = [valid").expect("failed to write file");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[motion]\nsource = 42")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str("[motion]\nsource = \"simulated\"\n")
            .expect("failed to parse config");
        assert_eq!(config.motion.source, Some(MotionSourceKind::Simulated));
        assert_eq!(
            config.motion.update_interval_ms,
            Some(DEFAULT_UPDATE_INTERVAL_MS)
        );
        assert!(config.animation.spring_enabled());
    }

    #[test]
    fn none_source_parses_from_toml_and_cli() {
        let config: Config =
            toml::from_str("[motion]\nsource = \"none\"\n").expect("failed to parse config");
        assert_eq!(config.motion.source, Some(MotionSourceKind::Disabled));
        assert_eq!(
            "None".parse::<MotionSourceKind>(),
            Ok(MotionSourceKind::Disabled)
        );
        assert!("gyro".parse::<MotionSourceKind>().is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let motion = MotionConfig {
            update_interval_ms: Some(1),
            pointer_max_tilt: Some(9.0),
            ..MotionConfig::default()
        };
        assert_eq!(
            motion.update_interval(),
            Duration::from_millis(MIN_UPDATE_INTERVAL_MS)
        );
        assert_eq!(motion.pointer_max_tilt(), MAX_POINTER_MAX_TILT);

        let animation = AnimationConfig {
            spring: None,
            response_secs: Some(0.0),
            damping_fraction: Some(4.0),
        };
        assert!(animation.spring_enabled());
        assert_eq!(animation.response_secs(), MIN_SPRING_RESPONSE_SECS);
        assert_eq!(animation.damping_fraction(), MAX_SPRING_DAMPING);
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            "[motion]\npointer_max_tilt = nan\n\n[animation]\nresponse_secs = nan\ndamping_fraction = inf\n",
        )
        .expect("failed to parse config");

        assert_eq!(config.motion.pointer_max_tilt(), DEFAULT_POINTER_MAX_TILT);
        assert_eq!(config.animation.response_secs(), DEFAULT_SPRING_RESPONSE_SECS);
        assert_eq!(config.animation.damping_fraction(), DEFAULT_SPRING_DAMPING);
    }
}
