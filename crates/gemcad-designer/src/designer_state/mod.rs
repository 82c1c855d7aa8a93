//! Designer state for UI integration.
//!
//! [`DesignerState`] is the session object a front end drives: it owns the
//! scene, the selection, the interaction controller and the outstanding quick
//! fill. Every mutation is a synchronous `&mut self` call.
//!
//! This module is split into submodules:
//! - `layers`: Layer panel operations
//! - `file_io`: SVG import and export
//! - `quick_fill`: Fill lifecycle and merging stones into the scene

mod file_io;
mod layers;
mod quick_fill;

pub use quick_fill::QuickFillOutcome;

use gemcad_core::SceneError;
use gemcad_settings::Config;

use crate::canvas::{CanvasController, CanvasOutcome, DrawingMode, KeyInput, PointerEvent};
use crate::model::{Element, Point};
use crate::packing::PackingRequest;
use crate::quick_fill::FillTracker;
use crate::scene::Scene;
use crate::selection::SelectionState;

/// One editing session.
///
/// Dropping the state cancels any outstanding quick fill.
#[derive(Debug)]
pub struct DesignerState {
    scene: Scene,
    selection: SelectionState,
    controller: CanvasController,
    fills: FillTracker,
    config: Config,
    is_modified: bool,
}

impl DesignerState {
    /// Creates a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            scene: Scene::with_history_depth(config.history.max_depth),
            selection: SelectionState::new(),
            controller: CanvasController::new(&config.canvas, &config.history),
            fills: FillTracker::new(),
            config,
            is_modified: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controller(&self) -> &CanvasController {
        &self.controller
    }

    /// Whether the scene changed since the session started or was last marked clean.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn mark_clean(&mut self) {
        self.is_modified = false;
    }

    pub fn mode(&self) -> DrawingMode {
        self.controller.mode()
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.controller.set_mode(&mut self.scene, mode);
        tracing::debug!("Drawing mode set to {:?}", mode);
    }

    /// Index of the selected element in the active layer, if still valid.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.resolve(self.scene.active_elements().len())
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_index()
            .and_then(|i| self.scene.active_elements().get(i))
    }

    pub fn select(&mut self, index: usize) {
        self.selection.select(index);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Feeds a pointer event to the interaction controller.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<CanvasOutcome, SceneError> {
        let outcome = self
            .controller
            .handle_pointer(&mut self.scene, &mut self.selection, event)?;
        self.note(&outcome);
        Ok(outcome)
    }

    pub fn pointer_down(&mut self, p: Point) -> Result<CanvasOutcome, SceneError> {
        self.handle_pointer(PointerEvent::Down(p))
    }

    pub fn pointer_move(&mut self, p: Point) -> Result<CanvasOutcome, SceneError> {
        self.handle_pointer(PointerEvent::Move(p))
    }

    pub fn pointer_up(&mut self, p: Point) -> Result<CanvasOutcome, SceneError> {
        self.handle_pointer(PointerEvent::Up(p))
    }

    pub fn key_down(&mut self, input: KeyInput) -> Result<CanvasOutcome, SceneError> {
        let outcome = self
            .controller
            .key_down(&mut self.scene, &mut self.selection, input)?;
        self.note(&outcome);
        Ok(outcome)
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.scene.undo();
        self.after_history_move(changed)
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.scene.redo();
        self.after_history_move(changed)
    }

    pub fn can_undo(&self) -> bool {
        self.scene.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.scene.can_redo()
    }

    /// Quick-fill parameters from the configuration.
    pub fn default_packing_request(&self) -> PackingRequest {
        PackingRequest::from_settings(&self.config.packing)
    }

    fn after_history_move(&mut self, changed: bool) -> bool {
        if changed {
            self.selection.revalidate(self.scene.active_elements().len());
            self.is_modified = true;
        }
        changed
    }

    fn note(&mut self, outcome: &CanvasOutcome) {
        if matches!(
            outcome,
            CanvasOutcome::Committed(_)
                | CanvasOutcome::Moved(_)
                | CanvasOutcome::Deleted(_)
                | CanvasOutcome::Duplicated(_)
                | CanvasOutcome::Undone
                | CanvasOutcome::Redone
        ) {
            self.is_modified = true;
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DesignerState {
    fn drop(&mut self) {
        if self.fills.cancel() {
            tracing::debug!("Session closed with a fill outstanding");
        }
    }
}
