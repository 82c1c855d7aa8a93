//! Single-element selection on the active layer.

/// Tracks which element of the active layer is selected.
///
/// The index is a position in the active layer's element list and is always
/// validated against the current list before use, so a stale index left behind
/// by a deletion or an undo reads as "no selection".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// The selected index if it still addresses one of `len` elements.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        self.index.filter(|&i| i < len)
    }

    /// Drops the selection if it no longer addresses one of `len` elements.
    pub fn revalidate(&mut self, len: usize) {
        self.index = self.resolve(len);
    }

    /// The raw stored index, which may be stale.
    pub fn raw(&self) -> Option<usize> {
        self.index
    }
}
