//! Save / restore / publish orchestration.
//!
//! Ties the editor session to the persistence collaborators. The session
//! is never rolled back when persistence fails: a failed save leaves the
//! in-memory edits intact and retryable.

use crate::store::{PageRecord, PageStatus, PageStore, SeoFields, StoreError, StoreResult, VersionStore};
use crate::version::Version;
use blockpress_editor::EditorSession;
use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Caller-supplied save annotations.
#[derive(Debug, Clone, Default)]
pub struct SaveRequest {
    pub seo: SeoFields,
    pub change_summary: Option<String>,
    pub metadata: Map<String, Value>,
}

/// Open an editing session over a page's last-saved content, or `None`
/// when the page does not exist (the caller's not-found recovery path).
pub fn load_session(pages: &dyn PageStore, page_id: &str) -> StoreResult<Option<EditorSession>> {
    let Some(record) = pages.load(page_id)? else {
        return Ok(None);
    };
    Ok(Some(EditorSession::from_content(page_id, record.content)))
}

/// Persist the session's current snapshot and record it as a new version.
///
/// The just-saved state becomes the page's current content; the version
/// number is one above the highest recorded. The session itself is
/// untouched — on failure the pending edits survive for a retry.
pub fn save_session(
    session: &EditorSession,
    request: SaveRequest,
    pages: &mut dyn PageStore,
    versions: &mut dyn VersionStore,
) -> StoreResult<Version> {
    let snapshot = session.snapshot();
    let page_id = session.page_id();

    // Preserve published status across saves of a published page.
    let status = pages
        .load(page_id)?
        .map(|r| r.status)
        .unwrap_or(PageStatus::Draft);

    let record = PageRecord {
        content: snapshot.clone(),
        seo: request.seo,
        status,
        updated_at: Utc::now(),
    };
    pages.save(page_id, &record).map_err(|e| {
        warn!(page = %page_id, error = %e, "page save failed; session edits retained");
        e
    })?;

    let version_number = versions.latest_number(page_id)? + 1;
    let mut version = Version::new(version_number, snapshot).with_metadata(request.metadata);
    version.change_summary = request.change_summary;
    version.is_published = status == PageStatus::Published;

    versions.append(page_id, version.clone())?;
    debug!(page = %page_id, version = version_number, "saved page version");
    Ok(version)
}

/// Replace the session's working state with a prior version's content.
///
/// A pure read of the version store; the replacement is pushed onto the
/// session's undo history (restores are undoable), and nothing is
/// written back — a subsequent save records the restored state as a new
/// version, preserving the version prior to restore.
pub fn restore_version(
    session: &mut EditorSession,
    versions: &dyn VersionStore,
    version_number: u64,
) -> StoreResult<()> {
    let page_id = session.page_id().to_string();
    let version = versions
        .get(&page_id, version_number)?
        .ok_or_else(|| StoreError::VersionNotFound(page_id, version_number))?;

    session.replace_content(version.content);
    Ok(())
}

/// Flip the page's status to published. Publishes the last-saved
/// content, not unsaved in-memory edits.
pub fn publish_page(pages: &mut dyn PageStore, page_id: &str) -> StoreResult<()> {
    pages.publish(page_id)?;
    debug!(page = %page_id, "page published");
    Ok(())
}
