//! # Blockpress Editor
//!
//! Mutable editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: typed blocks + templates             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorSession transitions           │
//! │  - add/update/duplicate/delete/reorder      │
//! │  - deep-copy undo/redo history              │
//! │  - drag gesture + selection + recency list  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: blocks → VNode live preview         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Blocks are the source of truth**: the preview is a derived view,
//!    re-rendered after every transition.
//! 2. **Exception-free transitions**: guards are silent no-ops; only the
//!    asynchronous persistence boundary can fail, and that lives in the
//!    versions package.
//! 3. **History entries are values**: full deep copies, never aliased to
//!    the live array.

mod history;
mod session;

pub use history::History;
pub use session::{DragState, EditorSession};
