//! Remote import pass-through.
//!
//! An external fetch-and-extract service does the heavy lifting for the
//! URL path; this module only defines the wire shape and the trust-and-
//! pass-through call. Extraction heuristics apply to the local paste
//! path only.

use blockpress_model::Block;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Remote fetch failed: {0}")]
    Fetch(String),

    #[error("No content could be extracted")]
    NothingExtracted,
}

/// Shape returned by the external fetch-and-extract service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteImportResponse {
    #[serde(default)]
    pub blocks: Vec<Block>,
    pub success: bool,
}

/// External fetch-and-extract collaborator.
pub trait RemoteImporter {
    fn fetch(&self, url: &str) -> Result<RemoteImportResponse, ImportError>;
}

/// Import blocks from a URL through the external service.
///
/// The response shape is trusted and passed through untouched. A
/// `success: false` response or an empty block list surfaces as
/// [`ImportError::NothingExtracted`]; the caller leaves the session
/// unmodified and shows the message.
pub fn import_from_url(
    importer: &dyn RemoteImporter,
    url: &str,
) -> Result<Vec<Block>, ImportError> {
    let response = importer.fetch(url).map_err(|e| {
        warn!(%url, error = %e, "remote import failed");
        e
    })?;

    if !response.success || response.blocks.is_empty() {
        return Err(ImportError::NothingExtracted);
    }
    Ok(response.blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_model::{Block, BlockType};

    struct FixedImporter(RemoteImportResponse);

    impl RemoteImporter for FixedImporter {
        fn fetch(&self, _url: &str) -> Result<RemoteImportResponse, ImportError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_successful_import_passes_blocks_through() {
        let blocks = vec![Block::from_template("r-1".to_string(), BlockType::Hero)];
        let importer = FixedImporter(RemoteImportResponse {
            blocks: blocks.clone(),
            success: true,
        });

        let imported = import_from_url(&importer, "https://example.com").unwrap();
        assert_eq!(imported, blocks);
    }

    #[test]
    fn test_unsuccessful_response_is_nothing_extracted() {
        let importer = FixedImporter(RemoteImportResponse {
            blocks: vec![],
            success: false,
        });

        assert!(matches!(
            import_from_url(&importer, "https://example.com"),
            Err(ImportError::NothingExtracted)
        ));
    }

    #[test]
    fn test_response_shape_deserializes() {
        let json = r#"{"blocks": [], "success": true}"#;
        let response: RemoteImportResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
    }
}
