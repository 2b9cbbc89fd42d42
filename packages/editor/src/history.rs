//! # Undo/Redo History
//!
//! Snapshot log of block-sequence states with a cursor.
//!
//! ## Design
//!
//! - Each history-pushing transition stores a full deep copy of the
//!   block sequence, never a diff; entries are immune to later in-place
//!   mutation of the live array (Rust ownership guarantees no aliasing).
//! - The cursor points at the active entry. Undo/redo move the cursor
//!   and hand back the snapshot at the new position.
//! - Pushing while the cursor is mid-log truncates every entry beyond it
//!   first, so redo after a fresh edit is a no-op.

use blockpress_model::Block;

/// Append-only snapshot log with an active-entry cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Vec<Block>>,
    index: usize,
}

impl History {
    /// Start a log whose first entry is the session's initial state.
    pub fn new(initial: Vec<Block>) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Record a new state, discarding any undone future first.
    pub fn push(&mut self, blocks: &[Block]) {
        self.entries.truncate(self.index + 1);
        self.entries.push(blocks.to_vec());
        self.index = self.entries.len() - 1;
    }

    /// Step back; returns the snapshot to restore, if any.
    pub fn undo(&mut self) -> Option<&[Block]> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward; returns the snapshot to restore, if any.
    pub fn redo(&mut self) -> Option<&[Block]> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
