//! Application-wide constants.

/// Name of the protected layer every scene starts with.
pub const BASE_LAYER_NAME: &str = "Base";

/// Prefix used when generating names for new layers ("Layer 1", "Layer 2", ...).
pub const LAYER_NAME_PREFIX: &str = "Layer";

/// Width of the exported SVG document.
pub const EXPORT_WIDTH: u32 = 800;

/// Height of the exported SVG document.
pub const EXPORT_HEIGHT: u32 = 600;

/// Distance from the infinite line through a segment that still counts as a hit.
pub const LINE_HIT_TOLERANCE: f64 = 8.0;

/// Radius of the region created by a quick-select click.
pub const QUICK_SELECT_RADIUS: f64 = 40.0;

/// Offset applied to both axes when duplicating an element.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Spacing of the canvas grid that pointer input snaps to.
pub const GRID_SIZE: f64 = 20.0;

/// Number of vertices used to approximate a circular region as a polygon.
pub const REGION_POLYGON_SEGMENTS: usize = 40;

/// Upper bound on lattice points generated for one fill.
pub const MAX_FILL_CANDIDATES: usize = 2_000_000;

/// Stone spacing below which verification raises a warning.
pub const MIN_RECOMMENDED_SPACING: f64 = 0.05;

/// Default undo depth per layer.
pub const DEFAULT_HISTORY_DEPTH: usize = 200;

/// Path of the remote fill endpoint, relative to the service base URL.
pub const AUTO_FILL_ENDPOINT: &str = "/cad/auto-diamond-fill";
