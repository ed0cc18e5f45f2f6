//! Linear undo/redo history for a single editable value
//!
//! Commits push the old value onto the past stack and drop any redo
//! branch. A commit equal to the current value (by `PartialEq`) is
//! ignored, so repeated identical edits do not need repeated undos.

use std::collections::VecDeque;

use log::trace;

/// Undo/redo history over values of `T`
#[derive(Debug, Clone)]
pub struct History<T> {
    /// Older values, most recent last
    past: Vec<T>,
    present: T,
    /// Undone values, next redo first
    future: VecDeque<T>,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        History {
            past: Vec::new(),
            present: initial,
            future: VecDeque::new(),
        }
    }

    /// The current value
    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Commits a new value
    ///
    /// Returns false, leaving the history untouched, when `value` equals
    /// the current value.
    pub fn set_state(&mut self, value: T) -> bool {
        if value == self.present {
            trace!("Ignoring commit equal to the present value");
            return false;
        }

        let previous = std::mem::replace(&mut self.present, value);
        self.past.push(previous);
        self.future.clear();
        true
    }

    /// Steps back one commit; returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };

        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Re-applies the most recently undone commit; returns false when
    /// there is nothing to redo
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };

        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Starts a fresh history at `value`, e.g. when a different record is
    /// opened for editing
    pub fn reset(&mut self, value: T) {
        self.past.clear();
        self.future.clear();
        self.present = value;
    }

    /// Number of commits that can be undone
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of commits that can be redone
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}
