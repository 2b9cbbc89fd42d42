//! Block content variants.
//!
//! One struct per block variant, gathered into the [`BlockContent`] tagged
//! union. Serialized adjacently (`{"type": "hero", "content": {...}}`) so
//! snapshots keep the flat JSON shape persisted pages use.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed set of block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Hero,
    Text,
    Image,
    Cta,
    Features,
    Testimonial,
    Form,
    Pricing,
    Video,
    Gallery,
    Stats,
}

impl BlockType {
    /// All variants, in add-menu order.
    pub const ALL: [BlockType; 11] = [
        BlockType::Hero,
        BlockType::Text,
        BlockType::Image,
        BlockType::Cta,
        BlockType::Features,
        BlockType::Testimonial,
        BlockType::Form,
        BlockType::Pricing,
        BlockType::Video,
        BlockType::Gallery,
        BlockType::Stats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Cta => "cta",
            BlockType::Features => "features",
            BlockType::Testimonial => "testimonial",
            BlockType::Form => "form",
            BlockType::Pricing => "pricing",
            BlockType::Video => "video",
            BlockType::Gallery => "gallery",
            BlockType::Stats => "stats",
        }
    }

    /// Capitalized label, used as the default block name.
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Hero => "Hero",
            BlockType::Text => "Text",
            BlockType::Image => "Image",
            BlockType::Cta => "Cta",
            BlockType::Features => "Features",
            BlockType::Testimonial => "Testimonial",
            BlockType::Form => "Form",
            BlockType::Pricing => "Pricing",
            BlockType::Video => "Video",
            BlockType::Gallery => "Gallery",
            BlockType::Stats => "Stats",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialContent {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub submit_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoContent {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsContent {
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

/// Variant-specific content payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum BlockContent {
    Hero(HeroContent),
    Text(TextContent),
    Image(ImageContent),
    Cta(CtaContent),
    Features(FeaturesContent),
    Testimonial(TestimonialContent),
    Form(FormContent),
    Pricing(PricingContent),
    Video(VideoContent),
    Gallery(GalleryContent),
    Stats(StatsContent),
}

impl BlockContent {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockContent::Hero(_) => BlockType::Hero,
            BlockContent::Text(_) => BlockType::Text,
            BlockContent::Image(_) => BlockType::Image,
            BlockContent::Cta(_) => BlockType::Cta,
            BlockContent::Features(_) => BlockType::Features,
            BlockContent::Testimonial(_) => BlockType::Testimonial,
            BlockContent::Form(_) => BlockType::Form,
            BlockContent::Pricing(_) => BlockType::Pricing,
            BlockContent::Video(_) => BlockType::Video,
            BlockContent::Gallery(_) => BlockType::Gallery,
            BlockContent::Stats(_) => BlockType::Stats,
        }
    }

    /// Empty payload for a variant (all fields defaulted).
    pub fn empty(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Hero => BlockContent::Hero(HeroContent::default()),
            BlockType::Text => BlockContent::Text(TextContent::default()),
            BlockType::Image => BlockContent::Image(ImageContent::default()),
            BlockType::Cta => BlockContent::Cta(CtaContent::default()),
            BlockType::Features => BlockContent::Features(FeaturesContent::default()),
            BlockType::Testimonial => BlockContent::Testimonial(TestimonialContent::default()),
            BlockType::Form => BlockContent::Form(FormContent::default()),
            BlockType::Pricing => BlockContent::Pricing(PricingContent::default()),
            BlockType::Video => BlockContent::Video(VideoContent::default()),
            BlockType::Gallery => BlockContent::Gallery(GalleryContent::default()),
            BlockType::Stats => BlockContent::Stats(StatsContent::default()),
        }
    }

    /// Template payload for a variant, ready to render the moment the
    /// block is added. Returns a fresh value on every call.
    pub fn template(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Hero => BlockContent::Hero(HeroContent {
                headline: "Build something people want".to_string(),
                subheadline: "Launch a polished page in minutes, not weeks.".to_string(),
                button_text: "Get Started".to_string(),
                button_link: "#".to_string(),
            }),
            BlockType::Text => BlockContent::Text(TextContent {
                text: "Write something compelling here. This paragraph introduces your \
                       product and sets the tone for the rest of the page."
                    .to_string(),
            }),
            BlockType::Image => BlockContent::Image(ImageContent {
                url: "https://placehold.co/1200x600".to_string(),
                alt: "Placeholder image".to_string(),
                caption: String::new(),
            }),
            BlockType::Cta => BlockContent::Cta(CtaContent {
                heading: "Ready to get started?".to_string(),
                button_text: "Sign Up Free".to_string(),
                button_link: "#".to_string(),
            }),
            BlockType::Features => BlockContent::Features(FeaturesContent {
                heading: "Why choose us".to_string(),
                features: vec![
                    FeatureItem {
                        title: "Fast".to_string(),
                        description: "Blazing performance out of the box.".to_string(),
                        icon: "⚡".to_string(),
                    },
                    FeatureItem {
                        title: "Secure".to_string(),
                        description: "Your data stays yours.".to_string(),
                        icon: "🔒".to_string(),
                    },
                    FeatureItem {
                        title: "Simple".to_string(),
                        description: "No manual required.".to_string(),
                        icon: "✨".to_string(),
                    },
                ],
            }),
            BlockType::Testimonial => BlockContent::Testimonial(TestimonialContent {
                quote: "This changed how we work. Highly recommended.".to_string(),
                author: "Jamie Rivera".to_string(),
                role: "Founder, Acme Co".to_string(),
                avatar_url: String::new(),
            }),
            BlockType::Form => BlockContent::Form(FormContent {
                heading: "Get in touch".to_string(),
                fields: vec![
                    FormField {
                        label: "Name".to_string(),
                        field_type: "text".to_string(),
                        required: true,
                    },
                    FormField {
                        label: "Email".to_string(),
                        field_type: "email".to_string(),
                        required: true,
                    },
                    FormField {
                        label: "Message".to_string(),
                        field_type: "textarea".to_string(),
                        required: false,
                    },
                ],
                submit_text: "Send".to_string(),
            }),
            BlockType::Pricing => BlockContent::Pricing(PricingContent {
                heading: "Simple pricing".to_string(),
                plans: vec![
                    PricingPlan {
                        name: "Starter".to_string(),
                        price: "$0".to_string(),
                        period: "/month".to_string(),
                        features: vec!["1 page".to_string(), "Community support".to_string()],
                        button_text: "Start Free".to_string(),
                        highlighted: false,
                    },
                    PricingPlan {
                        name: "Pro".to_string(),
                        price: "$19".to_string(),
                        period: "/month".to_string(),
                        features: vec![
                            "Unlimited pages".to_string(),
                            "Custom domain".to_string(),
                            "Priority support".to_string(),
                        ],
                        button_text: "Go Pro".to_string(),
                        highlighted: true,
                    },
                ],
            }),
            BlockType::Video => BlockContent::Video(VideoContent {
                url: String::new(),
                caption: String::new(),
            }),
            BlockType::Gallery => BlockContent::Gallery(GalleryContent {
                heading: "Gallery".to_string(),
                images: vec![
                    GalleryImage {
                        url: "https://placehold.co/400x300".to_string(),
                        alt: String::new(),
                    },
                    GalleryImage {
                        url: "https://placehold.co/400x300".to_string(),
                        alt: String::new(),
                    },
                ],
            }),
            BlockType::Stats => BlockContent::Stats(StatsContent {
                stats: vec![
                    StatItem {
                        value: "10k+".to_string(),
                        label: "Users".to_string(),
                    },
                    StatItem {
                        value: "99.9%".to_string(),
                        label: "Uptime".to_string(),
                    },
                    StatItem {
                        value: "24/7".to_string(),
                        label: "Support".to_string(),
                    },
                ],
            }),
        }
    }

    /// Shallow-merge a field patch into this payload.
    ///
    /// The payload is round-tripped through its JSON object form, patch
    /// keys replace matching fields, sibling fields are untouched. A patch
    /// that produces an undeserializable shape leaves the payload as-is
    /// rather than erroring; editor transitions are exception-free.
    pub fn merged(&self, patch: &Map<String, Value>) -> BlockContent {
        let mut value = match serde_json::to_value(self) {
            Ok(v) => v,
            Err(_) => return self.clone(),
        };

        if let Some(Value::Object(fields)) = value.get_mut("content") {
            for (key, field) in patch {
                fields.insert(key.clone(), field.clone());
            }
        }

        serde_json::from_value(value).unwrap_or_else(|_| self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_template_is_fresh_value() {
        let a = BlockContent::template(BlockType::Features);
        let mut b = BlockContent::template(BlockType::Features);

        if let BlockContent::Features(content) = &mut b {
            content.features[0].title = "Changed".to_string();
        }

        // Editing one materialized template never affects another
        assert_ne!(a, b);
        assert_eq!(a, BlockContent::template(BlockType::Features));
    }

    #[test]
    fn test_content_serialization_shape() {
        let content = BlockContent::Hero(HeroContent {
            headline: "Hi".to_string(),
            ..Default::default()
        });

        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["type"], "hero");
        assert_eq!(value["content"]["headline"], "Hi");
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let value = json!({ "type": "pricing", "content": {} });
        let content: BlockContent = serde_json::from_value(value).unwrap();

        match content {
            BlockContent::Pricing(p) => assert!(p.plans.is_empty()),
            other => panic!("expected pricing, got {:?}", other.block_type()),
        }
    }

    #[test]
    fn test_merge_preserves_sibling_fields() {
        let content = BlockContent::template(BlockType::Hero);

        let mut patch = Map::new();
        patch.insert("headline".to_string(), json!("New headline"));
        let merged = content.merged(&patch);

        match (&content, &merged) {
            (BlockContent::Hero(before), BlockContent::Hero(after)) => {
                assert_eq!(after.headline, "New headline");
                assert_eq!(after.subheadline, before.subheadline);
                assert_eq!(after.button_text, before.button_text);
            }
            _ => panic!("variant changed by merge"),
        }
    }

    #[test]
    fn test_merge_with_bad_shape_is_noop() {
        let content = BlockContent::template(BlockType::Features);

        let mut patch = Map::new();
        patch.insert("features".to_string(), json!("not-an-array"));
        let merged = content.merged(&patch);

        assert_eq!(merged, content);
    }
}
