//! Field-level editing schema.
//!
//! Drives the property panel: which content fields exist per variant,
//! what input widget each one wants, and the item shape of repeating
//! groups. Exhaustive over [`BlockType`] so a new variant cannot ship
//! without an editing surface.

use crate::content::BlockType;
use serde::Serialize;

/// Input widget category for one content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    LongText,
    /// URL input.
    Url,
    /// Checkbox.
    Flag,
    /// Ordered repeating group of sub-fields.
    Group,
}

/// One editable field of a block variant's content.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    /// JSON key within the variant's `content` object.
    pub key: &'static str,
    /// Human label for the property panel.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Sub-field schema for `Group` fields, empty otherwise.
    pub item_fields: &'static [FieldSchema],
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSchema {
    FieldSchema {
        key,
        label,
        kind,
        item_fields: &[],
    }
}

const fn group(
    key: &'static str,
    label: &'static str,
    item_fields: &'static [FieldSchema],
) -> FieldSchema {
    FieldSchema {
        key,
        label,
        kind: FieldKind::Group,
        item_fields,
    }
}

static FEATURE_ITEM: [FieldSchema; 3] = [
    field("title", "Title", FieldKind::Text),
    field("description", "Description", FieldKind::LongText),
    field("icon", "Icon", FieldKind::Text),
];

static FORM_FIELD_ITEM: [FieldSchema; 3] = [
    field("label", "Label", FieldKind::Text),
    field("field_type", "Input type", FieldKind::Text),
    field("required", "Required", FieldKind::Flag),
];

static PLAN_ITEM: [FieldSchema; 6] = [
    field("name", "Plan name", FieldKind::Text),
    field("price", "Price", FieldKind::Text),
    field("period", "Billing period", FieldKind::Text),
    group("features", "Included features", &[]),
    field("button_text", "Button text", FieldKind::Text),
    field("highlighted", "Highlighted", FieldKind::Flag),
];

static GALLERY_ITEM: [FieldSchema; 2] = [
    field("url", "Image URL", FieldKind::Url),
    field("alt", "Alt text", FieldKind::Text),
];

static STAT_ITEM: [FieldSchema; 2] = [
    field("value", "Value", FieldKind::Text),
    field("label", "Label", FieldKind::Text),
];

static HERO: [FieldSchema; 4] = [
    field("headline", "Headline", FieldKind::Text),
    field("subheadline", "Subheadline", FieldKind::LongText),
    field("button_text", "Button text", FieldKind::Text),
    field("button_link", "Button link", FieldKind::Url),
];

static TEXT: [FieldSchema; 1] = [field("text", "Text", FieldKind::LongText)];

static IMAGE: [FieldSchema; 3] = [
    field("url", "Image URL", FieldKind::Url),
    field("alt", "Alt text", FieldKind::Text),
    field("caption", "Caption", FieldKind::Text),
];

static CTA: [FieldSchema; 3] = [
    field("heading", "Heading", FieldKind::Text),
    field("button_text", "Button text", FieldKind::Text),
    field("button_link", "Button link", FieldKind::Url),
];

static FEATURES: [FieldSchema; 2] = [
    field("heading", "Heading", FieldKind::Text),
    group("features", "Features", &FEATURE_ITEM),
];

static TESTIMONIAL: [FieldSchema; 4] = [
    field("quote", "Quote", FieldKind::LongText),
    field("author", "Author", FieldKind::Text),
    field("role", "Role", FieldKind::Text),
    field("avatar_url", "Avatar URL", FieldKind::Url),
];

static FORM: [FieldSchema; 3] = [
    field("heading", "Heading", FieldKind::Text),
    group("fields", "Form fields", &FORM_FIELD_ITEM),
    field("submit_text", "Submit button text", FieldKind::Text),
];

static PRICING: [FieldSchema; 2] = [
    field("heading", "Heading", FieldKind::Text),
    group("plans", "Plans", &PLAN_ITEM),
];

static VIDEO: [FieldSchema; 2] = [
    field("url", "Video URL", FieldKind::Url),
    field("caption", "Caption", FieldKind::Text),
];

static GALLERY: [FieldSchema; 2] = [
    field("heading", "Heading", FieldKind::Text),
    group("images", "Images", &GALLERY_ITEM),
];

static STATS: [FieldSchema; 1] = [group("stats", "Stats", &STAT_ITEM)];

/// Editing schema for a block variant's content fields.
pub fn field_schema(block_type: BlockType) -> &'static [FieldSchema] {
    match block_type {
        BlockType::Hero => &HERO,
        BlockType::Text => &TEXT,
        BlockType::Image => &IMAGE,
        BlockType::Cta => &CTA,
        BlockType::Features => &FEATURES,
        BlockType::Testimonial => &TESTIMONIAL,
        BlockType::Form => &FORM,
        BlockType::Pricing => &PRICING,
        BlockType::Video => &VIDEO,
        BlockType::Gallery => &GALLERY,
        BlockType::Stats => &STATS,
    }
}
