//! # Blockpress Versions
//!
//! Snapshot-and-restore versioning over the editor session, plus the
//! persistence boundary contracts ([`PageStore`], [`VersionStore`]).
//!
//! Save serializes `{blocks, theme}` into an immutable [`Version`] with
//! an incremented number; restore replaces the session's working state
//! as an undoable edit and never deletes versions. A failed save leaves
//! the session's in-memory edits intact.

mod service;
mod store;
mod version;

pub use service::{load_session, publish_page, restore_version, save_session, SaveRequest};
pub use store::{
    MemoryPageStore, MemoryVersionStore, PageRecord, PageStatus, PageStore, SeoFields,
    StoreError, StoreResult, VersionStore,
};
pub use version::Version;
