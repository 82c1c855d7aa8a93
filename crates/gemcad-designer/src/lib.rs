//! # GemCAD Designer
//!
//! The interactive 2D design canvas of the jewelry CAD: a layered vector
//! scene with per-layer undo, a tool state machine for drawing and dragging,
//! SVG interchange, and automatic stone packing ("quick fill") with a
//! manufacturability check.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (session)
//!   ├── Scene (layers, each with its own History)
//!   ├── SelectionState
//!   ├── CanvasController (tool state machine, HitTester)
//!   └── FillTracker (outstanding quick fill, CancellationSource)
//!
//! Quick fill: Region -> FillRequest -> PackingService -> PackingResult
//!   ├── LocalPackingService (hex / pave / channel lattices)
//!   └── HttpPackingService  (POST /cad/auto-diamond-fill)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gemcad_designer::{DesignerState, DrawingMode, Point};
//!
//! let mut state = DesignerState::new();
//! state.set_mode(DrawingMode::Rectangle);
//! state.pointer_down(Point::new(10.0, 10.0))?;
//! state.pointer_up(Point::new(50.0, 40.0))?;
//! let svg = state.export_svg();
//! ```

pub mod canvas;
pub mod designer_state;
pub mod history;
pub mod import;
pub mod model;
pub mod packing;
pub mod quick_fill;
pub mod scene;
pub mod selection;
pub mod svg_renderer;
pub mod verification;

pub use canvas::{
    CanvasController, CanvasOutcome, DrawingMode, InteractionState, Key, KeyInput, PointerEvent,
};
pub use designer_state::{DesignerState, QuickFillOutcome};
pub use history::History;
pub use hit_test::{hit_test, HitTester};
pub use import::{ImportSummary, SvgImporter};
pub use model::{
    DesignCircle, DesignEllipse, DesignLine, DesignPath, DesignRectangle, Element, Point, Shape,
    ShapeType, Style,
};
pub use packing::{
    pack_polygon, PackingReport, PackingRequest, PackingResult, Region, StonePlacement,
};
pub use quick_fill::{
    run_fill, service_from_settings, CancellationSource, CancellationToken, FillRequest,
    FillResponse, FillTicket, HttpPackingService, LocalPackingService, PackingService,
};
pub use scene::{Layer, Scene};
pub use selection::SelectionState;
pub use svg_renderer::{export_layer, export_svg, render_document};
pub use verification::{verify, CheckStatus, VerificationReport};
