//! GemCAD Settings Crate
//!
//! Handles application configuration: canvas behaviour, history limits and
//! quick-fill defaults, persisted as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, HistorySettings, PackingSettings};
pub use error::{ConfigError, SettingsError};
