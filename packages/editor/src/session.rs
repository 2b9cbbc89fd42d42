//! # Editor Session
//!
//! The live, mutable state of one active editing instance: the working
//! block sequence, selection, undo/redo history, drag-reorder gesture
//! state, and the recency list biasing the add-block menu.
//!
//! ## Transition Semantics
//!
//! - Every transition runs synchronously to completion on the calling
//!   event; there is no background mutation of `blocks` or history.
//! - Transitions never return errors. Guards (locked delete, out-of-range
//!   reorder, unknown IDs) are silent no-ops: they are normal, expected
//!   conditions, not exceptions.
//! - Every content-mutating transition stores a full deep copy of the
//!   block sequence in history. Toggling `hidden` deliberately does not:
//!   visibility is a lightweight, non-undoable flag (a known quirk kept
//!   for compatibility, not a pattern to extend).
//!
//! The session is an explicit object passed by reference to every
//! operation, so multiple sessions can coexist in-process for testing;
//! exactly one session is presumed to hold write access to a given page.

use crate::history::History;
use blockpress_model::{
    Block, BlockType, IdGenerator, PageContent, StylePatch, Theme,
};
use blockpress_render::{render_page, VNode};
use serde_json::{Map, Value};
use tracing::debug;

/// How many block types the add-menu recency list remembers.
const RECENT_TYPES_MAX: usize = 5;

/// Transient drag-reorder gesture state, scoped to one gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Index recorded at drag start.
    pub dragged_index: Option<usize>,
    /// Last hover target as the pointer crosses block boundaries.
    pub drag_over_index: Option<usize>,
}

/// One active editing instance for a page.
#[derive(Debug, Clone)]
pub struct EditorSession {
    page_id: String,

    /// Working block sequence; order is the sole vertical position.
    pub blocks: Vec<Block>,
    pub theme: Theme,
    pub selected_block_id: Option<String>,

    history: History,
    drag: DragState,
    recent_block_types: Vec<BlockType>,
    ids: IdGenerator,
}

impl EditorSession {
    /// Start an empty session for a page.
    pub fn new(page_id: impl Into<String>) -> Self {
        let page_id = page_id.into();
        let ids = IdGenerator::new(&page_id);
        Self {
            page_id,
            blocks: Vec::new(),
            theme: Theme::default(),
            selected_block_id: None,
            history: History::new(Vec::new()),
            drag: DragState::default(),
            recent_block_types: Vec::new(),
            ids,
        }
    }

    /// Start a session over a loaded snapshot. The ID generator resumes
    /// above any counter already present so IDs are never reused.
    pub fn from_content(page_id: impl Into<String>, content: PageContent) -> Self {
        let page_id = page_id.into();
        let ids = IdGenerator::resume(
            &page_id,
            content
                .blocks
                .iter()
                .filter_map(|b| IdGenerator::counter_of(&b.id)),
        );
        Self {
            page_id,
            history: History::new(content.blocks.clone()),
            blocks: content.blocks,
            theme: content.theme,
            selected_block_id: None,
            drag: DragState::default(),
            recent_block_types: Vec::new(),
            ids,
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    // ---- block transitions ----------------------------------------------

    /// Append a new block materialized from the variant's template,
    /// select it, and record it in the add-menu recency list.
    pub fn add_block(&mut self, block_type: BlockType) -> String {
        let block = Block::from_template(self.ids.next_id(), block_type);
        let id = block.id.clone();
        debug!(block = %id, %block_type, "add block");

        self.blocks.push(block);
        self.selected_block_id = Some(id.clone());
        self.touch_recent(block_type);
        self.push_history();
        id
    }

    /// Shallow-merge a field patch into a block's content. Sibling fields
    /// are untouched; an unknown ID is a no-op.
    pub fn update_content(&mut self, id: &str, patch: &Map<String, Value>) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.blocks[index].content = self.blocks[index].content.merged(patch);
        self.push_history();
    }

    /// Shallow-merge a style patch into a block's styles.
    pub fn update_styles(&mut self, id: &str, patch: &StylePatch) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.blocks[index].styles.apply(patch);
        self.push_history();
    }

    /// Rename a block's user-facing label.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.blocks[index].name = Some(name.into());
        self.push_history();
    }

    /// Deep-clone a block, insert the clone immediately after the
    /// original, and select it. Returns the clone's ID.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let index = self.index_of(id)?;

        let mut clone = self.blocks[index].clone();
        clone.id = self.ids.next_id();
        clone.name = Some(format!("{} (Copy)", self.blocks[index].display_name()));
        let clone_id = clone.id.clone();
        debug!(source = %id, clone = %clone_id, "duplicate block");

        self.blocks.insert(index + 1, clone);
        self.selected_block_id = Some(clone_id.clone());
        self.push_history();
        Some(clone_id)
    }

    /// Remove a block. Locked blocks refuse deletion (silent no-op).
    /// Clears the selection if it pointed at the removed block.
    pub fn delete(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if self.blocks[index].locked {
            debug!(block = %id, "delete refused: block is locked");
            return;
        }

        self.blocks.remove(index);
        if self.selected_block_id.as_deref() == Some(id) {
            self.selected_block_id = None;
        }
        self.push_history();
    }

    /// Atomic splice-and-insert: the block at `from` is removed and
    /// reinserted at `to`; blocks between the two indices shift by one.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= self.blocks.len() || to >= self.blocks.len() || from == to {
            return;
        }

        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.push_history();
    }

    /// Flip visibility. Deliberately not pushed to history: the hidden
    /// flag is a non-undoable, lightweight toggle.
    pub fn toggle_hidden(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.blocks[index].hidden = !self.blocks[index].hidden;
    }

    /// Flip the deletion lock. Undoable, unlike the hidden toggle.
    pub fn toggle_locked(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.blocks[index].locked = !self.blocks[index].locked;
        self.push_history();
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected_block_id = id.map(String::from);
    }

    // ---- drag gesture ----------------------------------------------------

    /// Record the gesture origin. Ignored while a gesture is already in
    /// progress; the gesture is atomic from start to end.
    pub fn drag_start(&mut self, index: usize) {
        if self.drag.dragged_index.is_some() {
            return;
        }
        if index >= self.blocks.len() {
            return;
        }
        self.drag.dragged_index = Some(index);
        self.drag.drag_over_index = None;
    }

    /// Update the hover target as the pointer crosses block boundaries.
    pub fn drag_over(&mut self, index: usize) {
        if self.drag.dragged_index.is_none() {
            return;
        }
        self.drag.drag_over_index = Some(index);
    }

    /// Commit the reorder using the last hover target, then clear both
    /// pointers whether or not a reorder occurred.
    pub fn drag_end(&mut self) {
        let drag = std::mem::take(&mut self.drag);
        if let (Some(from), Some(to)) = (drag.dragged_index, drag.drag_over_index) {
            self.reorder(from, to);
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    // ---- history ---------------------------------------------------------

    /// Step back one history entry, replacing the working sequence.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo() {
            self.blocks = snapshot.to_vec();
            self.reconcile_selection();
            true
        } else {
            false
        }
    }

    /// Step forward one history entry, replacing the working sequence.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo() {
            self.blocks = snapshot.to_vec();
            self.reconcile_selection();
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // ---- snapshots -------------------------------------------------------

    /// Serialize the working state into a persistable snapshot.
    pub fn snapshot(&self) -> PageContent {
        PageContent {
            blocks: self.blocks.clone(),
            theme: self.theme.clone(),
        }
    }

    /// Replace the working state with a snapshot's content, treated as a
    /// new user edit: the replacement itself is pushed onto history, so
    /// restoring a version is undoable.
    pub fn replace_content(&mut self, content: PageContent) {
        debug!(blocks = content.blocks.len(), "replace session content");
        self.blocks = content.blocks;
        self.theme = content.theme;
        self.reconcile_selection();
        self.push_history();
    }

    /// Append imported blocks onto the current sequence as one edit.
    /// Arriving IDs are not trusted: every appended block is reminted
    /// from this session's generator, so repeated imports (or a remote
    /// response reusing IDs) cannot produce duplicate IDs in the
    /// sequence.
    pub fn append_blocks(&mut self, blocks: Vec<Block>) {
        if blocks.is_empty() {
            return;
        }
        let ids = &mut self.ids;
        self.blocks.extend(blocks.into_iter().map(|mut block| {
            block.id = ids.next_id();
            block
        }));
        self.push_history();
    }

    /// Re-derive the live preview for the current working state.
    pub fn preview(&self) -> Vec<VNode> {
        render_page(&self.snapshot())
    }

    /// Most-recently-added block types, most recent first, max five.
    pub fn recent_block_types(&self) -> &[BlockType] {
        &self.recent_block_types
    }

    // ---- internals -------------------------------------------------------

    fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    fn push_history(&mut self) {
        self.history.push(&self.blocks);
    }

    /// Drop a selection that no longer names a block in the sequence.
    fn reconcile_selection(&mut self) {
        if let Some(selected) = &self.selected_block_id {
            if !self.blocks.iter().any(|b| &b.id == selected) {
                self.selected_block_id = None;
            }
        }
    }

    fn touch_recent(&mut self, block_type: BlockType) {
        self.recent_block_types.retain(|t| *t != block_type);
        self.recent_block_types.insert(0, block_type);
        self.recent_block_types.truncate(RECENT_TYPES_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_block_selects_and_records_recency() {
        let mut session = EditorSession::new("page-1");

        let id = session.add_block(BlockType::Hero);
        assert_eq!(session.blocks.len(), 1);
        assert_eq!(session.selected_block_id.as_deref(), Some(id.as_str()));
        assert_eq!(session.recent_block_types(), &[BlockType::Hero]);

        session.add_block(BlockType::Text);
        assert_eq!(
            session.recent_block_types(),
            &[BlockType::Text, BlockType::Hero]
        );
    }

    #[test]
    fn test_recent_types_dedupe_and_cap() {
        let mut session = EditorSession::new("page-1");
        for block_type in [
            BlockType::Hero,
            BlockType::Text,
            BlockType::Image,
            BlockType::Cta,
            BlockType::Stats,
            BlockType::Video,
            BlockType::Hero,
        ] {
            session.add_block(block_type);
        }

        assert_eq!(session.recent_block_types().len(), RECENT_TYPES_MAX);
        assert_eq!(session.recent_block_types()[0], BlockType::Hero);
        // Hero moved to the front rather than appearing twice
        assert_eq!(
            session
                .recent_block_types()
                .iter()
                .filter(|t| **t == BlockType::Hero)
                .count(),
            1
        );
    }

    #[test]
    fn test_delete_clears_matching_selection_only() {
        let mut session = EditorSession::new("page-1");
        let a = session.add_block(BlockType::Hero);
        let b = session.add_block(BlockType::Text);

        session.select(Some(&a));
        session.delete(&b);
        assert_eq!(session.selected_block_id.as_deref(), Some(a.as_str()));

        session.delete(&a);
        assert_eq!(session.selected_block_id, None);
    }

    #[test]
    fn test_drag_gesture_commits_last_hover_target() {
        let mut session = EditorSession::new("page-1");
        let a = session.add_block(BlockType::Hero);
        session.add_block(BlockType::Text);
        session.add_block(BlockType::Image);

        session.drag_start(0);
        session.drag_over(1);
        session.drag_over(2);
        session.drag_end();

        assert_eq!(session.blocks[2].id, a);
        assert_eq!(session.drag_state(), DragState::default());
    }

    #[test]
    fn test_drag_end_without_hover_clears_state() {
        let mut session = EditorSession::new("page-1");
        session.add_block(BlockType::Hero);
        let before = session.blocks.clone();

        session.drag_start(0);
        session.drag_end();

        assert_eq!(session.blocks, before);
        assert_eq!(session.drag_state(), DragState::default());
    }

    #[test]
    fn test_drag_start_ignored_mid_gesture() {
        let mut session = EditorSession::new("page-1");
        session.add_block(BlockType::Hero);
        session.add_block(BlockType::Text);

        session.drag_start(0);
        session.drag_start(1); // second gesture may not begin
        assert_eq!(session.drag_state().dragged_index, Some(0));
    }

    #[test]
    fn test_toggle_hidden_skips_history() {
        let mut session = EditorSession::new("page-1");
        let id = session.add_block(BlockType::Hero);
        let history_len = session.history_len();

        session.toggle_hidden(&id);
        assert!(session.blocks[0].hidden);
        assert_eq!(session.history_len(), history_len);

        // Locked toggling stays undoable
        session.toggle_locked(&id);
        assert_eq!(session.history_len(), history_len + 1);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut session = EditorSession::new("page-1");
        session.add_block(BlockType::Hero);
        let history_len = session.history_len();

        session.delete("missing");
        session.toggle_hidden("missing");
        session.update_styles("missing", &StylePatch::default());
        assert_eq!(session.blocks.len(), 1);
        assert_eq!(session.history_len(), history_len);
    }
}
