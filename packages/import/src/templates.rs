//! Predefined page templates.
//!
//! A read-only catalog of `{blocks, theme}` pairs keyed by category.
//! Selecting a template replaces the session's content wholesale;
//! "blank" yields an empty block sequence and leaves the theme alone.

use blockpress_model::{
    Block, BlockContent, BlockType, CtaContent, FeatureItem, FeaturesContent, HeroContent,
    IdGenerator, StatItem, StatsContent, TestimonialContent, Theme,
};
use serde::Serialize;

/// Catalog entry, before materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

/// A selected template's content. `theme` is `None` for "blank": the
/// session keeps whatever theme it already has.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateContent {
    pub blocks: Vec<Block>,
    pub theme: Option<Theme>,
}

/// Everything the template picker lists, grouped by `category`.
pub fn template_catalog() -> &'static [TemplateDescriptor] {
    &[
        TemplateDescriptor {
            key: "blank",
            name: "Blank",
            category: "basic",
        },
        TemplateDescriptor {
            key: "launch",
            name: "Product Launch",
            category: "marketing",
        },
        TemplateDescriptor {
            key: "studio",
            name: "Studio Portfolio",
            category: "portfolio",
        },
        TemplateDescriptor {
            key: "saas",
            name: "SaaS Landing",
            category: "marketing",
        },
    ]
}

/// Materialize a template into fresh blocks. Every call builds new
/// values with fresh IDs; instances never share content. Unknown keys
/// yield `None`.
pub fn materialize_template(key: &str, ids: &mut IdGenerator) -> Option<TemplateContent> {
    match key {
        "blank" => Some(TemplateContent {
            blocks: Vec::new(),
            theme: None,
        }),
        "launch" => Some(launch_template(ids)),
        "studio" => Some(studio_template(ids)),
        "saas" => Some(saas_template(ids)),
        _ => None,
    }
}

fn launch_template(ids: &mut IdGenerator) -> TemplateContent {
    let blocks = vec![
        Block::with_content(
            ids.next_id(),
            BlockContent::Hero(HeroContent {
                headline: "Meet the product your team has been waiting for".to_string(),
                subheadline: "Ship faster without sacrificing quality.".to_string(),
                button_text: "Join the Waitlist".to_string(),
                button_link: "#signup".to_string(),
            }),
        ),
        Block::from_template(ids.next_id(), BlockType::Features),
        Block::from_template(ids.next_id(), BlockType::Stats),
        Block::with_content(
            ids.next_id(),
            BlockContent::Cta(CtaContent {
                heading: "Be first in line".to_string(),
                button_text: "Join the Waitlist".to_string(),
                button_link: "#signup".to_string(),
            }),
        ),
    ];

    TemplateContent {
        blocks,
        theme: Some(Theme {
            primary_color: "#7c3aed".to_string(),
            ..Theme::default()
        }),
    }
}

fn studio_template(ids: &mut IdGenerator) -> TemplateContent {
    let blocks = vec![
        Block::with_content(
            ids.next_id(),
            BlockContent::Hero(HeroContent {
                headline: "Design that tells your story".to_string(),
                subheadline: "A small studio with big ideas.".to_string(),
                button_text: "See Our Work".to_string(),
                button_link: "#gallery".to_string(),
            }),
        ),
        Block::from_template(ids.next_id(), BlockType::Gallery),
        Block::with_content(
            ids.next_id(),
            BlockContent::Testimonial(TestimonialContent {
                quote: "They understood our brand better than we did.".to_string(),
                author: "Morgan Lee".to_string(),
                role: "CMO, Fieldnotes".to_string(),
                avatar_url: String::new(),
            }),
        ),
        Block::from_template(ids.next_id(), BlockType::Form),
    ];

    TemplateContent {
        blocks,
        theme: Some(Theme {
            primary_color: "#0f766e".to_string(),
            font_family: Some("Georgia, serif".to_string()),
            ..Theme::default()
        }),
    }
}

fn saas_template(ids: &mut IdGenerator) -> TemplateContent {
    let blocks = vec![
        Block::from_template(ids.next_id(), BlockType::Hero),
        Block::with_content(
            ids.next_id(),
            BlockContent::Features(FeaturesContent {
                heading: "Everything you need".to_string(),
                features: vec![
                    FeatureItem {
                        title: "Integrations".to_string(),
                        description: "Connects to the tools you already use.".to_string(),
                        icon: "🔌".to_string(),
                    },
                    FeatureItem {
                        title: "Analytics".to_string(),
                        description: "Know what works at a glance.".to_string(),
                        icon: "📈".to_string(),
                    },
                    FeatureItem {
                        title: "Automation".to_string(),
                        description: "Put the busywork on autopilot.".to_string(),
                        icon: "🤖".to_string(),
                    },
                ],
            }),
        ),
        Block::from_template(ids.next_id(), BlockType::Pricing),
        Block::with_content(
            ids.next_id(),
            BlockContent::Stats(StatsContent {
                stats: vec![
                    StatItem {
                        value: "2,400+".to_string(),
                        label: "Teams".to_string(),
                    },
                    StatItem {
                        value: "38%".to_string(),
                        label: "Time saved".to_string(),
                    },
                ],
            }),
        ),
        Block::from_template(ids.next_id(), BlockType::Cta),
    ];

    TemplateContent {
        blocks,
        theme: Some(Theme {
            primary_color: "#2563eb".to_string(),
            border_radius: Some("8px".to_string()),
            ..Theme::default()
        }),
    }
}
