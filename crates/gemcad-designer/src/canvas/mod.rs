//! Interaction controller for the design canvas.
//!
//! Turns pointer and keyboard input into scene mutations. The controller owns
//! only gesture state; the [`Scene`] and [`SelectionState`] it edits are passed
//! in by the owning session on every call.
//!
//! ```text
//! Idle --down(select, hit)--> Dragging --move--> Dragging --up--> Idle
//! Idle --down(draw tool)----> Drawing  --move--> Drawing  --up--> Idle (commit)
//! Idle --down(quick select)-> QuickSelecting -----------------> Idle (region)
//! ```
//!
//! With grid snapping on, every pointer position is rounded to the grid
//! before it reaches the state machine.

mod types;

pub use types::{
    CanvasOutcome, DragGesture, DrawingGesture, DrawingMode, InteractionState, Key, KeyInput,
    PointerEvent,
};

use gemcad_core::constants::DUPLICATE_OFFSET;
use gemcad_core::SceneError;
use gemcad_settings::{CanvasSettings, HistorySettings};

use crate::hit_test::HitTester;
use crate::model::{
    DesignEllipse, DesignLine, DesignPath, DesignRectangle, Element, Point, Shape, Style,
};
use crate::packing::Region;
use crate::scene::Scene;
use crate::selection::SelectionState;

/// Tool state machine driving scene edits.
#[derive(Debug, Clone)]
pub struct CanvasController {
    mode: DrawingMode,
    state: InteractionState,
    hit_tester: HitTester,
    quick_select_radius: f64,
    coalesce_drag: bool,
    /// Grid spacing when snapping is on.
    snap: Option<f64>,
    draw_style: Style,
}

impl CanvasController {
    pub fn new(canvas: &CanvasSettings, history: &HistorySettings) -> Self {
        Self {
            mode: DrawingMode::Select,
            state: InteractionState::Idle,
            hit_tester: HitTester::new(canvas.line_hit_tolerance),
            quick_select_radius: canvas.quick_select_radius,
            coalesce_drag: history.coalesce_drag,
            snap: canvas.snap_to_grid.then_some(canvas.grid_size),
            draw_style: Style::default(),
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn hit_tester(&self) -> &HitTester {
        &self.hit_tester
    }

    /// Style given to newly drawn elements.
    pub fn set_draw_style(&mut self, style: Style) {
        self.draw_style = style;
    }

    /// Rounds `p` to the grid when snapping is on.
    pub fn snap_point(&self, p: Point) -> Point {
        match self.snap {
            Some(grid) => Point::new((p.x / grid).round() * grid, (p.y / grid).round() * grid),
            None => p,
        }
    }

    /// Switches tool. Any gesture in progress is abandoned first.
    pub fn set_mode(&mut self, scene: &mut Scene, mode: DrawingMode) {
        if !self.state.is_idle() {
            self.cancel(scene);
        }
        self.mode = mode;
    }

    /// Dispatches a pointer event to the matching handler.
    pub fn handle_pointer(
        &mut self,
        scene: &mut Scene,
        selection: &mut SelectionState,
        event: PointerEvent,
    ) -> Result<CanvasOutcome, SceneError> {
        match event {
            PointerEvent::Down(p) => self.pointer_down(scene, selection, p),
            PointerEvent::Move(p) => self.pointer_move(scene, p),
            PointerEvent::Up(p) => self.pointer_up(scene, p),
        }
    }

    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        selection: &mut SelectionState,
        p: Point,
    ) -> Result<CanvasOutcome, SceneError> {
        if !self.state.is_idle() {
            return Ok(CanvasOutcome::None);
        }
        let p = self.snap_point(p);

        match self.mode {
            DrawingMode::Select => {
                let Some(index) = self.hit_tester.hit_test(scene.active_elements(), p) else {
                    selection.clear();
                    return Ok(CanvasOutcome::SelectionCleared);
                };
                selection.select(index);

                let layer = scene.active_layer_name().to_string();
                if self.coalesce_drag {
                    scene.begin_batch(&layer)?;
                }
                self.state = InteractionState::Dragging(DragGesture {
                    layer,
                    index,
                    last: p,
                });
                Ok(CanvasOutcome::Selected(index))
            }
            DrawingMode::Pen
            | DrawingMode::Rectangle
            | DrawingMode::Ellipse
            | DrawingMode::Line => {
                let path = (self.mode == DrawingMode::Pen).then(|| DesignPath::begin(p));
                self.state = InteractionState::Drawing(DrawingGesture {
                    mode: self.mode,
                    start: p,
                    current: p,
                    path,
                });
                Ok(CanvasOutcome::GestureUpdated)
            }
            DrawingMode::QuickSelect => {
                // Quick select is a click, not a drag: the region is emitted
                // and the controller is idle again before this call returns.
                self.state = InteractionState::QuickSelecting;
                let region = Region::new(p, self.quick_select_radius);
                self.state = InteractionState::Idle;
                tracing::debug!(
                    "Quick select region at ({}, {}) r={}",
                    p.x,
                    p.y,
                    region.radius
                );
                Ok(CanvasOutcome::RegionSelected(region))
            }
        }
    }

    pub fn pointer_move(&mut self, scene: &mut Scene, p: Point) -> Result<CanvasOutcome, SceneError> {
        let p = self.snap_point(p);
        match &mut self.state {
            InteractionState::Drawing(gesture) => {
                gesture.current = p;
                if let Some(path) = gesture.path.as_mut() {
                    path.line_to(p);
                }
                Ok(CanvasOutcome::GestureUpdated)
            }
            InteractionState::Dragging(drag) => {
                let dx = p.x - drag.last.x;
                let dy = p.y - drag.last.y;
                if dx == 0.0 && dy == 0.0 {
                    return Ok(CanvasOutcome::None);
                }

                let moved = scene
                    .elements(&drag.layer)?
                    .get(drag.index)
                    .map(|element| element.translated(dx, dy));
                let Some(moved) = moved else {
                    tracing::warn!(
                        "Dragged element {} vanished from layer '{}'",
                        drag.index,
                        drag.layer
                    );
                    self.finish_drag(scene)?;
                    return Ok(CanvasOutcome::Cancelled);
                };
                scene.replace_element(&drag.layer, drag.index, moved)?;
                drag.last = p;
                Ok(CanvasOutcome::Moved(drag.index))
            }
            InteractionState::Idle | InteractionState::QuickSelecting => Ok(CanvasOutcome::None),
        }
    }

    pub fn pointer_up(&mut self, scene: &mut Scene, p: Point) -> Result<CanvasOutcome, SceneError> {
        let p = self.snap_point(p);
        match std::mem::take(&mut self.state) {
            InteractionState::Drawing(gesture) => {
                let element = Element::new(
                    Self::finish_shape(gesture, p),
                    self.draw_style.clone(),
                );
                let layer = scene.active_layer_name().to_string();
                let index = scene.add_element(&layer, element)?;
                Ok(CanvasOutcome::Committed(index))
            }
            InteractionState::Dragging(drag) => {
                if self.coalesce_drag {
                    scene.end_batch(&drag.layer)?;
                }
                Ok(CanvasOutcome::None)
            }
            InteractionState::Idle | InteractionState::QuickSelecting => Ok(CanvasOutcome::None),
        }
    }

    /// Handles keyboard shortcuts. Shortcuts are ignored mid-gesture, except
    /// Escape which abandons the gesture.
    pub fn key_down(
        &mut self,
        scene: &mut Scene,
        selection: &mut SelectionState,
        input: KeyInput,
    ) -> Result<CanvasOutcome, SceneError> {
        if input.key == Key::Escape {
            return Ok(self.cancel(scene));
        }
        if !self.state.is_idle() {
            return Ok(CanvasOutcome::None);
        }

        if input.key == Key::Delete {
            let Some(index) = selection.resolve(scene.active_elements().len()) else {
                return Ok(CanvasOutcome::None);
            };
            let layer = scene.active_layer_name().to_string();
            let removed = scene.remove_element(&layer, index)?;
            selection.clear();
            return Ok(CanvasOutcome::Deleted(removed));
        }

        if input.is_duplicate() {
            let Some(index) = selection.resolve(scene.active_elements().len()) else {
                return Ok(CanvasOutcome::None);
            };
            let layer = scene.active_layer_name().to_string();
            let copy =
                scene.active_elements()[index].translated(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
            let new_index = scene.add_element(&layer, copy)?;
            selection.select(new_index);
            return Ok(CanvasOutcome::Duplicated(new_index));
        }

        if input.is_undo() {
            let changed = scene.undo();
            selection.revalidate(scene.active_elements().len());
            return Ok(if changed {
                CanvasOutcome::Undone
            } else {
                CanvasOutcome::None
            });
        }

        if input.is_redo() {
            let changed = scene.redo();
            selection.revalidate(scene.active_elements().len());
            return Ok(if changed {
                CanvasOutcome::Redone
            } else {
                CanvasOutcome::None
            });
        }

        Ok(CanvasOutcome::None)
    }

    /// Abandons the gesture in progress. A drawing is discarded; a drag keeps
    /// the moves already applied.
    pub fn cancel(&mut self, scene: &mut Scene) -> CanvasOutcome {
        match std::mem::take(&mut self.state) {
            InteractionState::Idle => CanvasOutcome::None,
            InteractionState::Dragging(drag) => {
                if self.coalesce_drag {
                    // The layer may have been deleted under the gesture.
                    let _ = scene.end_batch(&drag.layer);
                }
                CanvasOutcome::Cancelled
            }
            InteractionState::Drawing(_) | InteractionState::QuickSelecting => {
                CanvasOutcome::Cancelled
            }
        }
    }

    /// The shape a drawing gesture would commit if released now.
    pub fn preview(&self) -> Option<Element> {
        match &self.state {
            InteractionState::Drawing(gesture) => {
                let end = gesture.current;
                Some(Element::new(
                    Self::finish_shape(gesture.clone(), end),
                    self.draw_style.clone(),
                ))
            }
            _ => None,
        }
    }

    fn finish_drag(&mut self, scene: &mut Scene) -> Result<(), SceneError> {
        if let InteractionState::Dragging(drag) = std::mem::take(&mut self.state) {
            if self.coalesce_drag {
                scene.end_batch(&drag.layer)?;
            }
        }
        Ok(())
    }

    fn finish_shape(gesture: DrawingGesture, end: Point) -> Shape {
        let start = gesture.start;
        match gesture.mode {
            DrawingMode::Rectangle => Shape::Rectangle(DesignRectangle::from_corners(start, end)),
            DrawingMode::Ellipse => Shape::Ellipse(DesignEllipse::from_drag(start, end)),
            DrawingMode::Line => Shape::Line(DesignLine::new(start, end)),
            DrawingMode::Pen | DrawingMode::Select | DrawingMode::QuickSelect => {
                Shape::Path(gesture.path.unwrap_or_else(|| DesignPath::begin(start)))
            }
        }
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(&CanvasSettings::default(), &HistorySettings::default())
    }
}
