//! Heuristic block extraction from raw markup.
//!
//! Five independent, additive pattern rules, applied in a fixed order:
//!
//! 1. every `<h1>` → hero, pairing an immediately-following `<p>` sibling
//!    as the subheadline
//! 2. every `<img>` → image, with its URL recorded in a side list for
//!    later replacement
//! 3. every `<p>` whose trimmed text exceeds 20 characters → text
//! 4. the first button-like element → exactly one cta
//! 5. every `<ul>`/`<ol>` with ≥ 3 items → features, capped at 6 items,
//!    cycling a fixed icon glyph sequence
//!
//! The same subtree can feed several rules; absence of matches for a rule
//! yields zero blocks, never an error.

use crate::dom::{parse_html, HtmlNode};
use blockpress_model::{
    Block, BlockContent, CtaContent, FeatureItem, FeaturesContent, HeroContent, IdGenerator,
    ImageContent, TextContent,
};
use tracing::debug;

/// Text blocks require more than this many trimmed characters, filtering
/// out labels and nav fragments.
const TEXT_MIN_CHARS: usize = 20;

/// Feature lists cap at this many items.
const FEATURES_MAX_ITEMS: usize = 6;

/// Glyphs cycled across extracted feature items.
const FEATURE_ICONS: [&str; 6] = ["✨", "⚡", "🎯", "💡", "🔒", "🚀"];

/// Result of one extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub blocks: Vec<Block>,
    /// URLs of every extracted image, surfaced for later replacement.
    pub image_urls: Vec<String>,
}

impl Extraction {
    /// True when no rule matched anything; the caller surfaces a
    /// "no content could be extracted" message and leaves the session
    /// untouched.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Run the heuristic rules over raw markup.
pub fn extract_blocks(markup: &str, ids: &mut IdGenerator) -> Extraction {
    let forest = parse_html(markup);
    let mut extraction = Extraction::default();

    extract_heroes(&forest, ids, &mut extraction);
    extract_images(&forest, ids, &mut extraction);
    extract_text(&forest, ids, &mut extraction);
    extract_cta(&forest, ids, &mut extraction);
    extract_features(&forest, ids, &mut extraction);

    debug!(
        blocks = extraction.blocks.len(),
        images = extraction.image_urls.len(),
        "heuristic extraction finished"
    );
    extraction
}

/// Rule 1: every `<h1>`, with an immediately-following `<p>` sibling as
/// the subheadline when present.
fn extract_heroes(forest: &[HtmlNode], ids: &mut IdGenerator, out: &mut Extraction) {
    walk_sibling_lists(forest, &mut |siblings| {
        for (index, node) in siblings.iter().enumerate() {
            if node.tag() != Some("h1") {
                continue;
            }

            let subheadline = siblings[index + 1..]
                .iter()
                .find(|sibling| !matches!(sibling, HtmlNode::Text(t) if t.trim().is_empty()))
                .filter(|sibling| sibling.tag() == Some("p"))
                .map(|p| p.text_content())
                .unwrap_or_default();

            out.blocks.push(Block::with_content(
                ids.next_id(),
                BlockContent::Hero(HeroContent {
                    headline: node.text_content(),
                    subheadline,
                    button_text: String::new(),
                    button_link: String::new(),
                }),
            ));
        }
    });
}

/// Rule 2: every `<img>`, URL also recorded in the side list.
fn extract_images(forest: &[HtmlNode], ids: &mut IdGenerator, out: &mut Extraction) {
    walk_elements(forest, &mut |node| {
        if node.tag() != Some("img") {
            return;
        }
        let url = node.attr("src").unwrap_or_default().to_string();
        if url.is_empty() {
            return;
        }

        out.image_urls.push(url.clone());
        out.blocks.push(Block::with_content(
            ids.next_id(),
            BlockContent::Image(ImageContent {
                url,
                alt: node.attr("alt").unwrap_or_default().to_string(),
                caption: String::new(),
            }),
        ));
    });
}

/// Rule 3: every `<p>` with enough trimmed text.
fn extract_text(forest: &[HtmlNode], ids: &mut IdGenerator, out: &mut Extraction) {
    walk_elements(forest, &mut |node| {
        if node.tag() != Some("p") {
            return;
        }
        let text = node.text_content();
        if text.chars().count() <= TEXT_MIN_CHARS {
            return;
        }

        out.blocks.push(Block::with_content(
            ids.next_id(),
            BlockContent::Text(TextContent { text }),
        ));
    });
}

/// Rule 4: exactly one cta from the first button-like element, if any.
fn extract_cta(forest: &[HtmlNode], ids: &mut IdGenerator, out: &mut Extraction) {
    let mut first_button: Option<(String, String)> = None;

    walk_elements(forest, &mut |node| {
        if first_button.is_some() || !is_button_like(node) {
            return;
        }
        let text = node.text_content();
        let text = if text.is_empty() {
            node.attr("value").unwrap_or("Learn More").to_string()
        } else {
            text
        };
        let link = node.attr("href").unwrap_or_default().to_string();
        first_button = Some((text, link));
    });

    if let Some((button_text, button_link)) = first_button {
        out.blocks.push(Block::with_content(
            ids.next_id(),
            BlockContent::Cta(CtaContent {
                heading: String::new(),
                button_text,
                button_link,
            }),
        ));
    }
}

fn is_button_like(node: &HtmlNode) -> bool {
    match node.tag() {
        Some("button") => true,
        Some("input") => matches!(node.attr("type"), Some("submit") | Some("button")),
        Some("a") => {
            let class = node.attr("class").unwrap_or_default().to_ascii_lowercase();
            class.split_whitespace().any(|c| c.contains("btn") || c.contains("button"))
        }
        _ => false,
    }
}

/// Rule 5: every list with ≥ 3 items, capped, icons cycling.
fn extract_features(forest: &[HtmlNode], ids: &mut IdGenerator, out: &mut Extraction) {
    walk_elements(forest, &mut |node| {
        if !matches!(node.tag(), Some("ul") | Some("ol")) {
            return;
        }

        let items: Vec<String> = node
            .children()
            .iter()
            .filter(|child| child.tag() == Some("li"))
            .map(|li| li.text_content())
            .collect();
        if items.len() < 3 {
            return;
        }

        let features = items
            .into_iter()
            .take(FEATURES_MAX_ITEMS)
            .enumerate()
            .map(|(i, title)| FeatureItem {
                title,
                description: String::new(),
                icon: FEATURE_ICONS[i % FEATURE_ICONS.len()].to_string(),
            })
            .collect();

        out.blocks.push(Block::with_content(
            ids.next_id(),
            BlockContent::Features(FeaturesContent {
                heading: String::new(),
                features,
            }),
        ));
    });
}

/// Depth-first element visitor.
fn walk_elements(nodes: &[HtmlNode], visit: &mut impl FnMut(&HtmlNode)) {
    for node in nodes {
        if let HtmlNode::Element { children, .. } = node {
            visit(node);
            walk_elements(children, &mut *visit);
        }
    }
}

/// Visit every sibling list in the forest (the forest itself, then each
/// element's children), for rules that need following-sibling context.
fn walk_sibling_lists(nodes: &[HtmlNode], visit: &mut impl FnMut(&[HtmlNode])) {
    visit(nodes);
    for node in nodes {
        if let HtmlNode::Element { children, .. } = node {
            walk_sibling_lists(children, &mut *visit);
        }
    }
}
