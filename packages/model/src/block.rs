//! Block, style, and page snapshot types.

use crate::content::{BlockContent, BlockType};
use serde::{Deserialize, Serialize};

/// Vertical spacing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    None,
    Small,
    Medium,
    Large,
    Xlarge,
}

/// Horizontal content alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Variant-agnostic per-block style overrides.
///
/// Absent keys fall back to renderer defaults (medium padding, left
/// alignment, theme colors).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// Partial style update; `Some` fields overwrite, `None` fields are left
/// alone. Sibling keys are never erased by a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl BlockStyles {
    /// Shallow merge of a patch into these styles.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(color) = &patch.background_color {
            self.background_color = Some(color.clone());
        }
        if let Some(color) = &patch.text_color {
            self.text_color = Some(color.clone());
        }
        if let Some(padding) = patch.padding {
            self.padding = Some(padding);
        }
        if let Some(alignment) = patch.alignment {
            self.alignment = Some(alignment);
        }
    }
}

/// One typed, self-contained content unit within a page's ordered
/// sequence. The block's position in the sequence is its sole vertical
/// position; there is no z/position field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque ID, stable for the block's lifetime, never reused.
    pub id: String,

    /// Variant tag plus variant-specific payload, serialized flat as
    /// `"type"` / `"content"` keys.
    #[serde(flatten)]
    pub content: BlockContent,

    #[serde(default)]
    pub styles: BlockStyles,

    /// Excluded from rendered output and publish, retained in sequence.
    #[serde(default)]
    pub hidden: bool,

    /// Blocks deletion; all other mutations remain allowed.
    #[serde(default)]
    pub locked: bool,

    /// User-facing label, defaults to the capitalized variant name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Block {
    /// Materialize a new block from a variant's template content.
    pub fn from_template(id: String, block_type: BlockType) -> Self {
        Self {
            id,
            content: BlockContent::template(block_type),
            styles: BlockStyles::default(),
            hidden: false,
            locked: false,
            name: None,
        }
    }

    /// Build a block around an already-constructed payload (import path).
    pub fn with_content(id: String, content: BlockContent) -> Self {
        Self {
            id,
            content,
            styles: BlockStyles::default(),
            hidden: false,
            locked: false,
            name: None,
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.content.block_type()
    }

    /// Display name: explicit label, or the capitalized variant name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.block_type().label())
    }
}

/// Global style defaults applied wherever a block leaves a color/style
/// field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            secondary_color: None,
            font_family: None,
            border_radius: None,
        }
    }
}

/// The `{blocks, theme}` pair: the unit of persistence and versioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_json_shape() {
        let block = Block::from_template("abc-1".to_string(), BlockType::Hero);
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value["id"], "abc-1");
        assert_eq!(value["type"], "hero");
        assert!(value["content"].is_object());
        assert_eq!(value["hidden"], false);
        assert_eq!(value["locked"], false);
    }

    #[test]
    fn test_block_roundtrip() {
        let block = Block::from_template("abc-2".to_string(), BlockType::Pricing);
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }

    #[test]
    fn test_display_name_defaults_to_label() {
        let mut block = Block::from_template("x".to_string(), BlockType::Features);
        assert_eq!(block.display_name(), "Features");

        block.name = Some("Benefits".to_string());
        assert_eq!(block.display_name(), "Benefits");
    }

    #[test]
    fn test_style_patch_preserves_siblings() {
        let mut styles = BlockStyles {
            background_color: Some("#ffffff".to_string()),
            text_color: None,
            padding: Some(Padding::Large),
            alignment: None,
        };

        styles.apply(&StylePatch {
            alignment: Some(Alignment::Center),
            ..Default::default()
        });

        assert_eq!(styles.background_color.as_deref(), Some("#ffffff"));
        assert_eq!(styles.padding, Some(Padding::Large));
        assert_eq!(styles.alignment, Some(Alignment::Center));
    }
}
