//! Snapshot-based undo/redo.
//!
//! A [`History`] holds the current state plus the states before and after it.
//! Every [`commit`](History::commit) records a whole new state, so undo and
//! redo are simple moves between stacks and never fail.

use std::collections::VecDeque;

/// Undo/redo stacks around a current state.
///
/// `past` holds older states with the most recent last, `future` holds undone
/// states with the next redo first. The current state is logically the top of
/// `past`: [`undo_depth`](History::undo_depth) counts the states that can be
/// returned to.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    current: T,
    future: VecDeque<T>,
    max_depth: usize,
    batch: Option<Batch>,
}

#[derive(Debug, Clone, Copy)]
struct Batch {
    recorded: bool,
}

impl<T: Clone> History<T> {
    /// Creates a history whose first state is `initial`.
    ///
    /// `max_depth` bounds the number of states kept, current state included.
    pub fn new(initial: T, max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            current: initial,
            future: VecDeque::new(),
            max_depth: max_depth.max(1),
            batch: None,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    /// Records `state` as the new current state and clears the redo stack.
    ///
    /// Inside a batch only the first commit creates an undo step; later ones
    /// overwrite it.
    pub fn commit(&mut self, state: T) {
        self.future.clear();

        if let Some(batch) = self.batch.as_mut() {
            if batch.recorded {
                self.current = state;
                return;
            }
            batch.recorded = true;
        }

        let previous = std::mem::replace(&mut self.current, state);
        self.past.push(previous);

        while self.past.len() + 1 > self.max_depth {
            self.past.remove(0);
        }
    }

    /// Records `state` as an undo step of its own, even inside a batch.
    ///
    /// An open batch stays open, but its next commit starts a fresh step so
    /// the batch never absorbs this one.
    pub fn commit_separate(&mut self, state: T) {
        let batch = self.batch.take();
        self.commit(state);
        if batch.is_some() {
            self.batch = Some(Batch { recorded: false });
        }
    }

    /// Steps back one state. Returns the restored state, or `None` at the
    /// oldest state.
    pub fn undo(&mut self) -> Option<&T> {
        self.batch = None;
        let previous = self.past.pop()?;
        let discarded = std::mem::replace(&mut self.current, previous);
        self.future.push_front(discarded);
        Some(&self.current)
    }

    /// Re-applies the most recently undone state. Returns `None` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        self.batch = None;
        let next = self.future.pop_front()?;
        let previous = std::mem::replace(&mut self.current, next);
        self.past.push(previous);
        Some(&self.current)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Starts collapsing subsequent commits into a single undo step.
    pub fn begin_batch(&mut self) {
        self.batch = Some(Batch { recorded: false });
    }

    pub fn end_batch(&mut self) {
        self.batch = None;
    }

    pub fn in_batch(&self) -> bool {
        self.batch.is_some()
    }
}
