//! Undo/redo over immutable snapshots
//!
//! `History` keeps the current value plus bounded past and future stacks. A
//! push of a value equal to the present is ignored, and the first push after
//! an undo or redo is swallowed so that the caller re-applying the restored
//! value does not record it a second time.

use crate::model::Form;
use std::collections::VecDeque;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Generic snapshot history
#[derive(Debug, Clone)]
pub struct History<T> {
    /// Older snapshots, newest last
    past: VecDeque<T>,
    present: T,
    /// Undone snapshots, nearest redo first
    future: VecDeque<T>,
    limit: usize,
    /// Set by undo/redo, consumed by the next push
    replaying: bool,
}

/// History of form snapshots
pub type FormHistory = History<Form>;

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            limit,
            replaying: false,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Record `value` as the new present.
    ///
    /// Returns false when nothing was recorded: the push directly follows an
    /// undo/redo, or `value` equals the present.
    pub fn push(&mut self, value: T) -> bool {
        if std::mem::take(&mut self.replaying) {
            return false;
        }
        if value == self.present {
            return false;
        }

        let previous = std::mem::replace(&mut self.present, value);
        self.past.push_back(previous);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
        true
    }

    /// Step back one snapshot and return the restored value
    pub fn undo(&mut self) -> Option<T> {
        let previous = self.past.pop_back()?;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        self.replaying = true;
        Some(self.present.clone())
    }

    /// Step forward one snapshot and return the restored value
    pub fn redo(&mut self) -> Option<T> {
        let next = self.future.pop_front()?;
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.replaying = true;
        Some(self.present.clone())
    }

    /// Drop all history and start over from `value`
    pub fn clear(&mut self, value: T) {
        self.past.clear();
        self.future.clear();
        self.present = value;
        self.replaying = false;
    }

    /// Swap in a new present without recording an entry. The undo and redo
    /// stacks are left as they are.
    pub fn replace_present(&mut self, value: T) {
        self.present = value;
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

    pub fn limit(&self) -> usize {
        self.limit
    }
}
