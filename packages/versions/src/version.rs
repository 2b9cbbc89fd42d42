//! Immutable version records.

use blockpress_model::PageContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One historical snapshot of a page's content.
///
/// Created once per save, never mutated afterwards, and never deleted by
/// the editor itself. Listed newest-first for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub version_number: u64,
    pub content: PageContent,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_published: bool,
}

impl Version {
    pub fn new(version_number: u64, content: PageContent) -> Self {
        Self {
            version_number,
            content,
            metadata: Map::new(),
            change_summary: None,
            created_at: Utc::now(),
            is_published: false,
        }
    }

    pub fn with_change_summary(mut self, summary: impl Into<String>) -> Self {
        self.change_summary = Some(summary.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}
