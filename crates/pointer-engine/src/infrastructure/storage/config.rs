//! TOML-based configuration persistence.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\PointerSim\config.toml`
//! - Linux:    `~/.config/pointer-sim/config.toml`
//! - macOS:    `~/Library/Application Support/PointerSim/config.toml`
//!
//! Example:
//!
//! ```toml
//! [engine]
//! speed = 60
//! button_policy = "strict"
//!
//! [path]
//! step_delay_ms = 4.5
//! ```
//!
//! Every field carries a serde default, so a partial file (or none at all)
//! still loads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pointer_core::Size;

use crate::application::control::MAX_SPEED;
use crate::application::input_engine::{
    ButtonPolicy, EngineSettings, DEFAULT_ATTEMPTS, DEFAULT_TIMING_DIVISOR,
};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub path: PathConfig,
    #[serde(default)]
    pub surface: SurfaceConfig,
}

/// Engine behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Initial speed percentage; clamped to `[10, 100]` when applied.
    #[serde(default = "default_speed")]
    pub speed: i32,
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    /// Provider delay units per millisecond.
    #[serde(default = "default_timing_divisor")]
    pub timing_divisor: f64,
    #[serde(default)]
    pub button_policy: ButtonPolicy,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Settings for [`LinearPathProvider`](crate::infrastructure::path_timing::LinearPathProvider).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathConfig {
    #[serde(default = "default_pixels_per_step")]
    pub pixels_per_step: u32,
    #[serde(default = "default_min_steps")]
    pub min_steps: u32,
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
    /// Mean delay between samples at full speed.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: f64,
    #[serde(default = "default_press_duration_ms")]
    pub press_duration_ms: u64,
}

/// Dimensions of the in-memory surface used by the demo binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl SurfaceConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl AppConfig {
    /// Checks values that would otherwise silently disable movement.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `engine.timing_divisor` is not a
    /// finite positive number or `engine.attempts` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let divisor = self.engine.timing_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(ConfigError::Invalid {
                field: "engine.timing_divisor",
                reason: format!("must be a finite number above zero, got {divisor}"),
            });
        }
        if self.engine.attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "engine.attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The `[engine]` table as engine settings.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            attempts: self.engine.attempts,
            timing_divisor: self.engine.timing_divisor,
            button_policy: self.engine.button_policy,
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_speed() -> i32 {
    MAX_SPEED
}
fn default_attempts() -> u32 {
    DEFAULT_ATTEMPTS
}
fn default_timing_divisor() -> f64 {
    DEFAULT_TIMING_DIVISOR
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_pixels_per_step() -> u32 {
    12
}
fn default_min_steps() -> u32 {
    4
}
fn default_max_steps() -> u32 {
    64
}
fn default_step_delay_ms() -> f64 {
    6.0
}
fn default_press_duration_ms() -> u64 {
    90
}
fn default_width() -> u32 {
    1920
}
fn default_height() -> u32 {
    1080
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            attempts: default_attempts(),
            timing_divisor: default_timing_divisor(),
            button_policy: ButtonPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            pixels_per_step: default_pixels_per_step(),
            min_steps: default_min_steps(),
            max_steps: default_max_steps(),
            step_delay_ms: default_step_delay_ms(),
            press_duration_ms: default_press_duration_ms(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the platform config file.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] if the TOML is malformed, and
/// [`ConfigError::Invalid`] if a value fails [`AppConfig::validate`].
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let config: AppConfig = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to the platform config file.
///
/// # Errors
///
/// See [`save_config_to`].
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_file_path()?)
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("PointerSim"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("pointer-sim"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("PointerSim")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
