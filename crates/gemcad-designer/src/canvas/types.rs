//! Canvas type definitions: DrawingMode, InteractionState, pointer and key input.

use crate::model::{DesignPath, Element, Point};
use crate::packing::Region;

/// Tool selected in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Select,
    Pen,
    Rectangle,
    Ellipse,
    Line,
    QuickSelect,
}

impl DrawingMode {
    /// Whether the tool creates a new element with a press-drag-release gesture.
    pub fn is_drawing_tool(&self) -> bool {
        matches!(
            self,
            DrawingMode::Pen | DrawingMode::Rectangle | DrawingMode::Ellipse | DrawingMode::Line
        )
    }
}

/// Gesture in progress for a drawing tool.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingGesture {
    pub mode: DrawingMode,
    pub start: Point,
    pub current: Point,
    /// Accumulated path for the pen tool.
    pub path: Option<DesignPath>,
}

/// Gesture in progress while dragging the selected element.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pub layer: String,
    pub index: usize,
    /// Pointer position at the previous move.
    pub last: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Drawing(DrawingGesture),
    Dragging(DragGesture),
    QuickSelecting,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }
}

/// Pointer input in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Escape,
    Char(char),
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl_shift(c: char) -> Self {
        Self {
            shift: true,
            ..Self::ctrl(c)
        }
    }

    pub fn meta(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: false,
            meta: true,
            shift: false,
        }
    }

    fn is_command(&self) -> bool {
        self.ctrl || self.meta
    }

    fn is_char(&self, c: char) -> bool {
        matches!(self.key, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }

    /// Ctrl/Cmd+Z without Shift.
    pub fn is_undo(&self) -> bool {
        self.is_command() && !self.shift && self.is_char('z')
    }

    /// Ctrl/Cmd+Y or Shift+Ctrl/Cmd+Z.
    pub fn is_redo(&self) -> bool {
        self.is_command() && (self.is_char('y') || (self.shift && self.is_char('z')))
    }

    pub fn is_duplicate(&self) -> bool {
        self.is_command() && self.is_char('d')
    }
}

/// What an input event did to the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOutcome {
    /// Nothing changed.
    None,
    /// A gesture started or progressed without committing anything.
    GestureUpdated,
    /// An element was selected.
    Selected(usize),
    /// The selection was cleared by clicking empty canvas.
    SelectionCleared,
    /// A drawing gesture committed a new element at this index.
    Committed(usize),
    /// The dragged element was moved.
    Moved(usize),
    /// The selected element was deleted.
    Deleted(Element),
    /// The selected element was copied to this index and the copy selected.
    Duplicated(usize),
    /// Quick select produced a fill region.
    RegionSelected(Region),
    Undone,
    Redone,
    /// An in-progress gesture was abandoned.
    Cancelled,
}
