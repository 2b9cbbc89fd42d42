//! Persistence boundary contracts.
//!
//! Pages, their SEO fields, and version history live behind these traits;
//! the engine itself never owns durable storage. Memory-backed
//! implementations ship for tests and in-process use.

use crate::version::Version;
use blockpress_model::PageContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Version {1} not found for page {0}")]
    VersionNotFound(String, u64),

    #[error("Persistence failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Publish state of a page. Publishing flips the status on the
/// last-saved content and is independent of save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
}

/// Search-engine metadata carried on the persisted record; no engine
/// logic reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// The persisted shape of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub content: PageContent,
    #[serde(default)]
    pub seo: SeoFields,
    pub status: PageStatus,
    pub updated_at: DateTime<Utc>,
}

/// Page persistence collaborator.
pub trait PageStore {
    /// Fetch by ID; `None` routes the caller to its not-found recovery
    /// path, never a crash.
    fn load(&self, page_id: &str) -> StoreResult<Option<PageRecord>>;

    fn save(&mut self, page_id: &str, record: &PageRecord) -> StoreResult<()>;

    /// Flip `draft` → `published` on the last-saved content. Unsaved
    /// in-memory edits are not published.
    fn publish(&mut self, page_id: &str) -> StoreResult<()>;
}

/// Version history collaborator.
pub trait VersionStore {
    fn append(&mut self, page_id: &str, version: Version) -> StoreResult<()>;

    /// All versions of a page, newest-first.
    fn list(&self, page_id: &str) -> StoreResult<Vec<Version>>;

    /// Pure read of one version's record.
    fn get(&self, page_id: &str, version_number: u64) -> StoreResult<Option<Version>>;

    /// Highest recorded version number, 0 if none.
    fn latest_number(&self, page_id: &str) -> StoreResult<u64>;
}

/// In-memory page store.
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    pages: HashMap<String, PageRecord>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStore for MemoryPageStore {
    fn load(&self, page_id: &str) -> StoreResult<Option<PageRecord>> {
        Ok(self.pages.get(page_id).cloned())
    }

    fn save(&mut self, page_id: &str, record: &PageRecord) -> StoreResult<()> {
        self.pages.insert(page_id.to_string(), record.clone());
        Ok(())
    }

    fn publish(&mut self, page_id: &str) -> StoreResult<()> {
        let record = self
            .pages
            .get_mut(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        record.status = PageStatus::Published;
        Ok(())
    }
}

/// In-memory version store.
#[derive(Debug, Default)]
pub struct MemoryVersionStore {
    versions: HashMap<String, Vec<Version>>,
}

impl MemoryVersionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VersionStore for MemoryVersionStore {
    fn append(&mut self, page_id: &str, version: Version) -> StoreResult<()> {
        self.versions
            .entry(page_id.to_string())
            .or_default()
            .push(version);
        Ok(())
    }

    fn list(&self, page_id: &str) -> StoreResult<Vec<Version>> {
        let mut versions = self.versions.get(page_id).cloned().unwrap_or_default();
        versions.sort_by(|a, b| b.version_number.cmp(&a.version_number));
        Ok(versions)
    }

    fn get(&self, page_id: &str, version_number: u64) -> StoreResult<Option<Version>> {
        Ok(self
            .versions
            .get(page_id)
            .and_then(|vs| vs.iter().find(|v| v.version_number == version_number))
            .cloned())
    }

    fn latest_number(&self, page_id: &str) -> StoreResult<u64> {
        Ok(self
            .versions
            .get(page_id)
            .and_then(|vs| vs.iter().map(|v| v.version_number).max())
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_page_store_roundtrip() {
        let mut store = MemoryPageStore::new();
        assert!(store.load("p1").unwrap().is_none());

        let record = PageRecord {
            content: PageContent::default(),
            seo: SeoFields::default(),
            status: PageStatus::Draft,
            updated_at: Utc::now(),
        };
        store.save("p1", &record).unwrap();

        let loaded = store.load("p1").unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_publish_missing_page_errors() {
        let mut store = MemoryPageStore::new();
        assert!(matches!(
            store.publish("missing"),
            Err(StoreError::PageNotFound(_))
        ));
    }

    #[test]
    fn test_versions_list_newest_first() {
        let mut store = MemoryVersionStore::new();
        store
            .append("p1", Version::new(1, PageContent::default()))
            .unwrap();
        store
            .append("p1", Version::new(2, PageContent::default()))
            .unwrap();

        let listed = store.list("p1").unwrap();
        assert_eq!(listed[0].version_number, 2);
        assert_eq!(listed[1].version_number, 1);
        assert_eq!(store.latest_number("p1").unwrap(), 2);
    }
}
