//! Versioning scenarios: save/restore, failed-save retry semantics, and
//! publish-vs-save independence.

use blockpress_editor::EditorSession;
use blockpress_model::BlockType;
use blockpress_versions::{
    load_session, publish_page, restore_version, save_session, MemoryPageStore,
    MemoryVersionStore, PageRecord, PageStatus, PageStore, SaveRequest, StoreError, StoreResult,
    VersionStore,
};
use pretty_assertions::assert_eq;

/// Page store whose writes always fail, for the no-rollback contract.
#[derive(Default)]
struct FailingPageStore;

impl PageStore for FailingPageStore {
    fn load(&self, _page_id: &str) -> StoreResult<Option<PageRecord>> {
        Ok(None)
    }

    fn save(&mut self, _page_id: &str, _record: &PageRecord) -> StoreResult<()> {
        Err(StoreError::Backend("disk full".to_string()))
    }

    fn publish(&mut self, page_id: &str) -> StoreResult<()> {
        Err(StoreError::PageNotFound(page_id.to_string()))
    }
}

#[test]
fn save_restore_scenario() {
    let mut pages = MemoryPageStore::new();
    let mut versions = MemoryVersionStore::new();
    let mut session = EditorSession::new("page-1");

    // Create page with [hero]; save → version 1
    session.add_block(BlockType::Hero);
    let hero_only = session.blocks.clone();
    let v1 = save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();
    assert_eq!(v1.version_number, 1);

    // Add text block; save → version 2
    session.add_block(BlockType::Text);
    let two_blocks = session.blocks.clone();
    let v2 = save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();
    assert_eq!(v2.version_number, 2);

    // Restore version 1: blocks equal [hero] exactly
    restore_version(&mut session, &versions, 1).unwrap();
    assert_eq!(session.blocks, hero_only);

    // The restore itself is undoable
    assert!(session.undo());
    assert_eq!(session.blocks, two_blocks);

    // Version 2 survives the restore
    let listed = versions.list("page-1").unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].version_number, 2);
}

#[test]
fn restore_then_save_records_a_new_version() {
    let mut pages = MemoryPageStore::new();
    let mut versions = MemoryVersionStore::new();
    let mut session = EditorSession::new("page-1");

    session.add_block(BlockType::Hero);
    save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();
    session.add_block(BlockType::Text);
    save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();

    restore_version(&mut session, &versions, 1).unwrap();
    let v3 = save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();

    assert_eq!(v3.version_number, 3);
    assert_eq!(v3.content.blocks, session.blocks);
    assert_eq!(versions.list("page-1").unwrap().len(), 3);
}

#[test]
fn failed_save_keeps_session_edits() {
    let mut pages = FailingPageStore;
    let mut versions = MemoryVersionStore::new();
    let mut session = EditorSession::new("page-1");

    session.add_block(BlockType::Hero);
    let before = session.blocks.clone();

    let result = save_session(&session, SaveRequest::default(), &mut pages, &mut versions);
    assert!(result.is_err());

    // In-memory edits are not rolled back; the save is retryable
    assert_eq!(session.blocks, before);
    assert_eq!(versions.list("page-1").unwrap().len(), 0);

    let mut good_pages = MemoryPageStore::new();
    let retried =
        save_session(&session, SaveRequest::default(), &mut good_pages, &mut versions).unwrap();
    assert_eq!(retried.version_number, 1);
}

#[test]
fn publish_flips_last_saved_content_only() {
    let mut pages = MemoryPageStore::new();
    let mut versions = MemoryVersionStore::new();
    let mut session = EditorSession::new("page-1");

    session.add_block(BlockType::Hero);
    save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();

    // Unsaved edit, then publish: the stored content stays one block
    session.add_block(BlockType::Text);
    publish_page(&mut pages, "page-1").unwrap();

    let record = pages.load("page-1").unwrap().unwrap();
    assert_eq!(record.status, PageStatus::Published);
    assert_eq!(record.content.blocks.len(), 1);

    // A later save of a published page keeps its published status
    save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();
    let record = pages.load("page-1").unwrap().unwrap();
    assert_eq!(record.status, PageStatus::Published);
    assert_eq!(record.content.blocks.len(), 2);
}

#[test]
fn load_session_resumes_saved_content() {
    let mut pages = MemoryPageStore::new();
    let mut versions = MemoryVersionStore::new();
    let mut session = EditorSession::new("page-1");

    session.add_block(BlockType::Hero);
    session.add_block(BlockType::Stats);
    save_session(&session, SaveRequest::default(), &mut pages, &mut versions).unwrap();

    let mut resumed = load_session(&pages, "page-1").unwrap().unwrap();
    assert_eq!(resumed.blocks, session.blocks);

    // Fresh IDs in the resumed session never collide with loaded ones
    let new_id = resumed.add_block(BlockType::Text);
    assert!(resumed.blocks.iter().filter(|b| b.id == new_id).count() == 1);

    // Missing pages route to the not-found path, not a crash
    assert!(load_session(&pages, "missing").unwrap().is_none());
}

#[test]
fn save_request_annotations_are_recorded() {
    let mut pages = MemoryPageStore::new();
    let mut versions = MemoryVersionStore::new();
    let mut session = EditorSession::new("page-1");
    session.add_block(BlockType::Hero);

    let mut metadata = serde_json::Map::new();
    metadata.insert("editor".to_string(), serde_json::json!("web"));

    let version = save_session(
        &session,
        SaveRequest {
            change_summary: Some("first draft".to_string()),
            metadata,
            ..Default::default()
        },
        &mut pages,
        &mut versions,
    )
    .unwrap();

    assert_eq!(version.change_summary.as_deref(), Some("first draft"));
    assert_eq!(version.metadata["editor"], "web");
}
