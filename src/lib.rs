//! # GemCAD
//!
//! The 2D design canvas of a jewelry CAD:
//! - Layered vector scene with per-layer undo/redo
//! - Select, pen, rectangle, ellipse, line and quick-select tools
//! - SVG import and export
//! - Automatic stone packing ("quick fill") with hex, pavé and channel layouts
//! - Manufacturability verification of packed stones
//!
//! ## Architecture
//!
//! GemCAD is organized as a workspace with multiple crates:
//!
//! 1. **gemcad-core** - Error types, shared enums, constants
//! 2. **gemcad-settings** - TOML/JSON configuration
//! 3. **gemcad-designer** - Scene, history, interaction, SVG codec, packing
//! 4. **gemcad** - This facade and the `gemcad` command line tool

pub use gemcad_designer as designer;

pub use gemcad_core::{Error, GridType, PackingError, Result, SceneError, SvgError};
pub use gemcad_settings::{CanvasSettings, Config, HistorySettings, PackingSettings, SettingsError};

pub use gemcad_designer::{
    verify, CanvasOutcome, DesignerState, DrawingMode, Element, ImportSummary, KeyInput,
    LocalPackingService, PackingRequest, PackingResult, PackingService, Point, QuickFillOutcome,
    Region, Scene, Shape, VerificationReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("GEMCAD_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Honours `RUST_LOG`; otherwise logs at INFO.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_level("info")
}

/// Initialize logging with `level` as the fallback filter
///
/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// takes precedence when set.
pub fn init_logging_with_level(level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", level, e))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
