//! Configuration for GemCAD
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats stored in the platform-specific configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas behaviour (hit tolerance, quick-select radius, grid snapping)
//! - History limits (undo depth, drag coalescing)
//! - Quick-fill defaults (stone size, grid, spacing, remote service)

use crate::error::{ConfigError, SettingsError};
use gemcad_core::constants::{
    DEFAULT_HISTORY_DEPTH, GRID_SIZE, LINE_HIT_TOLERANCE, QUICK_SELECT_RADIUS,
};
use gemcad_core::GridType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Distance from a line that still selects it
    pub line_hit_tolerance: f64,
    /// Radius of the region created by a quick-select click
    pub quick_select_radius: f64,
    /// Round pointer input to the nearest grid intersection
    pub snap_to_grid: bool,
    /// Grid spacing used for snapping
    pub grid_size: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            line_hit_tolerance: LINE_HIT_TOLERANCE,
            quick_select_radius: QUICK_SELECT_RADIUS,
            snap_to_grid: false,
            grid_size: GRID_SIZE,
        }
    }
}

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of states kept per layer
    pub max_depth: usize,
    /// Collapse every pointer move of a drag into one undo step
    pub coalesce_drag: bool,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_HISTORY_DEPTH,
            coalesce_drag: false,
        }
    }
}

/// Quick-fill defaults and remote service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingSettings {
    /// Stone diameter in scene units
    pub stone_size: f64,
    /// Layout pattern
    pub grid_type: GridType,
    /// Gap between neighbouring stones
    pub spacing: f64,
    /// Minimum distance between stones and the region boundary
    pub padding: f64,
    /// Stone cut sent to the service ("round", "princess", ...)
    pub stone_shape: String,
    /// Send fills to the remote service instead of packing locally
    pub use_remote: bool,
    /// Base URL of the remote packing service
    pub endpoint: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for PackingSettings {
    fn default() -> Self {
        Self {
            stone_size: 1.5,
            grid_type: GridType::Hex,
            spacing: 0.2,
            padding: 0.5,
            stone_shape: "round".to_string(),
            use_remote: false,
            endpoint: "http://localhost:8000".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas behaviour
    pub canvas: CanvasSettings,
    /// History limits
    pub history: HistorySettings,
    /// Quick-fill defaults
    pub packing: PackingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file (`<config dir>/gemcad/config.toml`)
    pub fn default_config_path() -> Result<PathBuf, SettingsError> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("gemcad").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Self::format_of(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = &self.canvas;
        if !(canvas.line_hit_tolerance.is_finite() && canvas.line_hit_tolerance >= 0.0) {
            return Err(ConfigError::out_of_range(
                "canvas.line_hit_tolerance",
                canvas.line_hit_tolerance,
            ));
        }
        if !(canvas.quick_select_radius.is_finite() && canvas.quick_select_radius > 0.0) {
            return Err(ConfigError::out_of_range(
                "canvas.quick_select_radius",
                canvas.quick_select_radius,
            ));
        }
        if !(canvas.grid_size.is_finite() && canvas.grid_size > 0.0) {
            return Err(ConfigError::out_of_range("canvas.grid_size", canvas.grid_size));
        }

        if self.history.max_depth < 2 {
            return Err(ConfigError::out_of_range(
                "history.max_depth",
                self.history.max_depth,
            ));
        }

        let packing = &self.packing;
        if !(packing.stone_size.is_finite() && packing.stone_size > 0.0) {
            return Err(ConfigError::out_of_range(
                "packing.stone_size",
                packing.stone_size,
            ));
        }
        if !(packing.spacing.is_finite() && packing.spacing >= 0.0) {
            return Err(ConfigError::out_of_range("packing.spacing", packing.spacing));
        }
        if !(packing.padding.is_finite() && packing.padding >= 0.0) {
            return Err(ConfigError::out_of_range("packing.padding", packing.padding));
        }
        if packing.timeout_ms == 0 {
            return Err(ConfigError::out_of_range(
                "packing.timeout_ms",
                packing.timeout_ms,
            ));
        }

        Ok(())
    }

    fn format_of(path: &Path) -> Result<ConfigFormat, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

enum ConfigFormat {
    Json,
    Toml,
}
