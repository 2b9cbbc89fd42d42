//! # Blockpress Model
//!
//! Typed content schema for page blocks.
//!
//! A page is an ordered sequence of self-contained [`Block`]s. Each block
//! carries a closed-set [`BlockType`], a variant-specific [`BlockContent`]
//! payload, and variant-agnostic [`BlockStyles`]. The `{blocks, theme}`
//! pair ([`PageContent`]) is the unit of persistence and versioning.
//!
//! ## Core Principles
//!
//! 1. **Tagged union, not duck typing**: `content` is an exhaustive enum,
//!    so the renderer and the editor field schema can never silently miss
//!    a variant.
//! 2. **Templates are values**: adding a block materializes a fresh
//!    `BlockContent` value, never a shared reference, so edits to one
//!    instance cannot leak into another.
//! 3. **Tolerant deserialization**: every content field defaults, so a
//!    snapshot with missing fields still loads and renders (empty-state
//!    output instead of an error).

mod block;
mod content;
mod id;
mod schema;

pub use block::{Alignment, Block, BlockStyles, Padding, PageContent, StylePatch, Theme};
pub use content::{
    BlockContent, BlockType, CtaContent, FeatureItem, FeaturesContent, FormContent, FormField,
    GalleryContent, GalleryImage, HeroContent, ImageContent, PricingContent, PricingPlan,
    StatItem, StatsContent, TestimonialContent, TextContent, VideoContent,
};
pub use id::IdGenerator;
pub use schema::{field_schema, FieldKind, FieldSchema};
