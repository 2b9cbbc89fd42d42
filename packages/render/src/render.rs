//! Block → VNode rendering.
//!
//! Pure dispatch over the content union: `(block, theme)` in, virtual
//! nodes out. No I/O, no shared state; cheap enough to re-run on every
//! editor keystroke. Hidden blocks produce no output. Missing or empty
//! content fields degrade to empty-state output, never an error.

use crate::style::{lightness, resolve_styles};
use crate::vdom::VNode;
use blockpress_model::{
    Block, BlockContent, CtaContent, FeaturesContent, FormContent, GalleryContent, HeroContent,
    ImageContent, PageContent, PricingContent, StatsContent, TestimonialContent, TextContent,
    Theme, VideoContent,
};

/// Render one block, or `None` if the block is hidden.
pub fn render_block(block: &Block, theme: &Theme) -> Option<VNode> {
    if block.hidden {
        return None;
    }

    let resolved = resolve_styles(&block.styles, theme);

    let body = match &block.content {
        BlockContent::Hero(content) => render_hero(content, theme),
        BlockContent::Text(content) => render_text(content),
        BlockContent::Image(content) => render_image(content),
        BlockContent::Cta(content) => render_cta(content, theme),
        BlockContent::Features(content) => render_features(content),
        BlockContent::Testimonial(content) => render_testimonial(content),
        BlockContent::Form(content) => render_form(content, theme),
        BlockContent::Pricing(content) => render_pricing(content, theme),
        BlockContent::Video(content) => render_video(content),
        BlockContent::Gallery(content) => render_gallery(content),
        BlockContent::Stats(content) => render_stats(content, theme),
    };

    Some(
        VNode::element("section")
            .with_attr(
                "class",
                format!("bp-block bp-{}", block.block_type().as_str()),
            )
            .with_attr("data-block-id", block.id.clone())
            .with_style("padding", resolved.padding)
            .with_style("text-align", resolved.text_align)
            .with_opt_style("background-color", resolved.background_color)
            .with_opt_style("color", resolved.text_color)
            .with_children(body),
    )
}

/// Render a full page: every visible block, in sequence order.
pub fn render_page(content: &PageContent) -> Vec<VNode> {
    content
        .blocks
        .iter()
        .filter_map(|block| render_block(block, &content.theme))
        .collect()
}

/// Placeholder shown when a block has no usable content yet.
fn empty_state(hint: &str) -> Vec<VNode> {
    vec![VNode::element("div")
        .with_attr("class", "bp-empty")
        .with_child(VNode::text(hint))]
}

/// Theme-colored action button. Foreground picked against the primary
/// color so the label stays readable on any theme.
fn button(text: &str, link: &str, theme: &Theme) -> VNode {
    let primary_is_light = lightness(&theme.primary_color)
        .map(|l| l > 0.55)
        .unwrap_or(false);
    let foreground = if primary_is_light { "#1f2937" } else { "#ffffff" };

    let href = if link.is_empty() { "#" } else { link };

    VNode::element("a")
        .with_attr("class", "bp-button")
        .with_attr("href", href)
        .with_style("background-color", theme.primary_color.clone())
        .with_style("color", foreground)
        .with_opt_style("border-radius", theme.border_radius.clone())
        .with_child(VNode::text(text))
}

// Layout: headline over subheadline, single action button below.
fn render_hero(content: &HeroContent, theme: &Theme) -> Vec<VNode> {
    if content.headline.is_empty()
        && content.subheadline.is_empty()
        && content.button_text.is_empty()
    {
        return empty_state("Add a headline");
    }

    let mut nodes = Vec::new();
    if !content.headline.is_empty() {
        nodes.push(
            VNode::element("h1")
                .with_attr("class", "bp-hero-headline")
                .with_child(VNode::text(content.headline.clone())),
        );
    }
    if !content.subheadline.is_empty() {
        nodes.push(
            VNode::element("p")
                .with_attr("class", "bp-hero-subheadline")
                .with_child(VNode::text(content.subheadline.clone())),
        );
    }
    if !content.button_text.is_empty() {
        nodes.push(button(&content.button_text, &content.button_link, theme));
    }
    nodes
}

// Layout: one flowing paragraph.
fn render_text(content: &TextContent) -> Vec<VNode> {
    if content.text.is_empty() {
        return empty_state("Add some text");
    }

    vec![VNode::element("p")
        .with_attr("class", "bp-text-body")
        .with_child(VNode::text(content.text.clone()))]
}

// Layout: full-width figure with optional caption.
fn render_image(content: &ImageContent) -> Vec<VNode> {
    if content.url.is_empty() {
        return empty_state("Choose an image");
    }

    let mut figure = VNode::element("figure").with_child(
        VNode::element("img")
            .with_attr("src", content.url.clone())
            .with_attr("alt", content.alt.clone()),
    );
    if !content.caption.is_empty() {
        figure = figure.with_child(
            VNode::element("figcaption").with_child(VNode::text(content.caption.clone())),
        );
    }
    vec![figure]
}

// Layout: heading with a single prominent button.
fn render_cta(content: &CtaContent, theme: &Theme) -> Vec<VNode> {
    if content.heading.is_empty() && content.button_text.is_empty() {
        return empty_state("Add a call to action");
    }

    let mut nodes = Vec::new();
    if !content.heading.is_empty() {
        nodes.push(VNode::element("h2").with_child(VNode::text(content.heading.clone())));
    }
    if !content.button_text.is_empty() {
        nodes.push(button(&content.button_text, &content.button_link, theme));
    }
    nodes
}

// Layout: heading over an icon/title/description card grid.
fn render_features(content: &FeaturesContent) -> Vec<VNode> {
    if content.features.is_empty() {
        return empty_state("Add a feature");
    }

    let mut nodes = Vec::new();
    if !content.heading.is_empty() {
        nodes.push(VNode::element("h2").with_child(VNode::text(content.heading.clone())));
    }

    let cards = content.features.iter().map(|item| {
        let mut card = VNode::element("div").with_attr("class", "bp-feature");
        if !item.icon.is_empty() {
            card = card.with_child(
                VNode::element("span")
                    .with_attr("class", "bp-feature-icon")
                    .with_child(VNode::text(item.icon.clone())),
            );
        }
        card.with_child(VNode::element("h3").with_child(VNode::text(item.title.clone())))
            .with_child(VNode::element("p").with_child(VNode::text(item.description.clone())))
    });

    nodes.push(
        VNode::element("div")
            .with_attr("class", "bp-feature-grid")
            .with_children(cards),
    );
    nodes
}

// Layout: large quote with attribution line, optional avatar.
fn render_testimonial(content: &TestimonialContent) -> Vec<VNode> {
    if content.quote.is_empty() {
        return empty_state("Add a quote");
    }

    let mut quote = VNode::element("blockquote")
        .with_attr("class", "bp-quote")
        .with_child(VNode::text(content.quote.clone()));

    if !content.author.is_empty() || !content.role.is_empty() {
        let mut footer = VNode::element("footer");
        if !content.avatar_url.is_empty() {
            footer = footer.with_child(
                VNode::element("img")
                    .with_attr("class", "bp-avatar")
                    .with_attr("src", content.avatar_url.clone())
                    .with_attr("alt", content.author.clone()),
            );
        }
        let attribution = match (content.author.is_empty(), content.role.is_empty()) {
            (false, false) => format!("{}, {}", content.author, content.role),
            (false, true) => content.author.clone(),
            _ => content.role.clone(),
        };
        footer = footer.with_child(VNode::text(attribution));
        quote = quote.with_child(footer);
    }

    vec![quote]
}

// Layout: stacked labeled inputs with a submit button. Inputs are inert
// in the preview; submission wiring is outside the renderer.
fn render_form(content: &FormContent, theme: &Theme) -> Vec<VNode> {
    if content.fields.is_empty() {
        return empty_state("Add a form field");
    }

    let mut form = VNode::element("form").with_attr("class", "bp-form");
    if !content.heading.is_empty() {
        form = form.with_child(VNode::element("h2").with_child(VNode::text(content.heading.clone())));
    }

    for field in &content.fields {
        let input = if field.field_type == "textarea" {
            VNode::element("textarea").with_attr("name", field.label.clone())
        } else {
            let input_type = if field.field_type.is_empty() {
                "text".to_string()
            } else {
                field.field_type.clone()
            };
            VNode::element("input")
                .with_attr("type", input_type)
                .with_attr("name", field.label.clone())
        };
        let input = if field.required {
            input.with_attr("required", "required")
        } else {
            input
        };

        form = form.with_child(
            VNode::element("label")
                .with_child(VNode::text(field.label.clone()))
                .with_child(input),
        );
    }

    let submit = if content.submit_text.is_empty() {
        "Submit"
    } else {
        content.submit_text.as_str()
    };
    form = form.with_child(
        VNode::element("button")
            .with_attr("class", "bp-button")
            .with_attr("type", "submit")
            .with_style("background-color", theme.primary_color.clone())
            .with_opt_style("border-radius", theme.border_radius.clone())
            .with_child(VNode::text(submit)),
    );

    vec![form]
}

// Layout: heading over side-by-side plan cards; a highlighted plan gets a
// primary-colored border.
fn render_pricing(content: &PricingContent, theme: &Theme) -> Vec<VNode> {
    if content.plans.is_empty() {
        return empty_state("Add a pricing plan");
    }

    let mut nodes = Vec::new();
    if !content.heading.is_empty() {
        nodes.push(VNode::element("h2").with_child(VNode::text(content.heading.clone())));
    }

    let cards = content.plans.iter().map(|plan| {
        let mut card = VNode::element("div").with_attr("class", "bp-plan");
        if plan.highlighted {
            card = card
                .with_attr("data-highlighted", "true")
                .with_style("border-color", theme.primary_color.clone());
        }

        card = card
            .with_child(VNode::element("h3").with_child(VNode::text(plan.name.clone())))
            .with_child(
                VNode::element("div")
                    .with_attr("class", "bp-plan-price")
                    .with_child(VNode::text(format!("{}{}", plan.price, plan.period))),
            );

        if !plan.features.is_empty() {
            card = card.with_child(
                VNode::element("ul").with_children(
                    plan.features
                        .iter()
                        .map(|f| VNode::element("li").with_child(VNode::text(f.clone()))),
                ),
            );
        }

        if !plan.button_text.is_empty() {
            card = card.with_child(button(&plan.button_text, "#", theme));
        }
        card
    });

    nodes.push(
        VNode::element("div")
            .with_attr("class", "bp-plan-grid")
            .with_children(cards),
    );
    nodes
}

// Layout: embedded player with optional caption.
fn render_video(content: &VideoContent) -> Vec<VNode> {
    if content.url.is_empty() {
        return empty_state("Add a video URL");
    }

    let mut figure = VNode::element("figure").with_child(
        VNode::element("video")
            .with_attr("class", "bp-video")
            .with_attr("src", content.url.clone())
            .with_attr("controls", "controls"),
    );
    if !content.caption.is_empty() {
        figure = figure.with_child(
            VNode::element("figcaption").with_child(VNode::text(content.caption.clone())),
        );
    }
    vec![figure]
}

// Layout: heading over an image tile grid.
fn render_gallery(content: &GalleryContent) -> Vec<VNode> {
    if content.images.is_empty() {
        return empty_state("Add an image");
    }

    let mut nodes = Vec::new();
    if !content.heading.is_empty() {
        nodes.push(VNode::element("h2").with_child(VNode::text(content.heading.clone())));
    }
    nodes.push(
        VNode::element("div")
            .with_attr("class", "bp-gallery-grid")
            .with_children(content.images.iter().map(|image| {
                VNode::element("img")
                    .with_attr("src", image.url.clone())
                    .with_attr("alt", image.alt.clone())
            })),
    );
    nodes
}

// Layout: row of oversized values with small labels, values in the
// theme's primary color.
fn render_stats(content: &StatsContent, theme: &Theme) -> Vec<VNode> {
    if content.stats.is_empty() {
        return empty_state("Add a stat");
    }

    vec![VNode::element("div")
        .with_attr("class", "bp-stat-row")
        .with_children(content.stats.iter().map(|stat| {
            VNode::element("div")
                .with_attr("class", "bp-stat")
                .with_child(
                    VNode::element("div")
                        .with_attr("class", "bp-stat-value")
                        .with_style("color", theme.primary_color.clone())
                        .with_child(VNode::text(stat.value.clone())),
                )
                .with_child(
                    VNode::element("div")
                        .with_attr("class", "bp-stat-label")
                        .with_child(VNode::text(stat.label.clone())),
                )
        }))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_model::BlockType;

    #[test]
    fn test_every_variant_renders_from_empty_content() {
        // Totality: empty/default content must still produce output.
        for block_type in BlockType::ALL {
            let block = Block::with_content("b-1".to_string(), BlockContent::empty(block_type));
            let node = render_block(&block, &Theme::default());
            assert!(node.is_some(), "{block_type} rendered nothing");
        }
    }

    #[test]
    fn test_every_variant_renders_from_template_content() {
        for block_type in BlockType::ALL {
            let block = Block::from_template("b-1".to_string(), block_type);
            let node = render_block(&block, &Theme::default()).unwrap();
            assert_eq!(
                node.attr("class").unwrap(),
                format!("bp-block bp-{}", block_type.as_str())
            );
        }
    }

    #[test]
    fn test_hidden_block_renders_nothing() {
        let mut block = Block::from_template("b-1".to_string(), BlockType::Hero);
        block.hidden = true;
        assert_eq!(render_block(&block, &Theme::default()), None);
    }

    #[test]
    fn test_button_only_hero_renders_its_button() {
        let block = Block::with_content(
            "b-1".to_string(),
            BlockContent::Hero(HeroContent {
                button_text: "Get Started".to_string(),
                button_link: "/go".to_string(),
                ..Default::default()
            }),
        );

        let node = render_block(&block, &Theme::default()).unwrap();
        let VNode::Element { children, .. } = &node else {
            panic!("expected element");
        };
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].attr("class"), Some("bp-button"));
        assert_eq!(children[0].attr("href"), Some("/go"));
    }

    #[test]
    fn test_pricing_with_no_plans_is_empty_state() {
        let block = Block::with_content("b-1".to_string(), BlockContent::empty(BlockType::Pricing));
        let node = render_block(&block, &Theme::default()).unwrap();

        let VNode::Element { children, .. } = &node else {
            panic!("expected element");
        };
        assert_eq!(children[0].attr("class"), Some("bp-empty"));
    }

    #[test]
    fn test_render_page_skips_hidden_blocks() {
        let mut hidden = Block::from_template("b-2".to_string(), BlockType::Text);
        hidden.hidden = true;

        let content = PageContent {
            blocks: vec![
                Block::from_template("b-1".to_string(), BlockType::Hero),
                hidden,
            ],
            theme: Theme::default(),
        };

        let nodes = render_page(&content);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].attr("data-block-id"), Some("b-1"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let block = Block::from_template("b-1".to_string(), BlockType::Pricing);
        let theme = Theme::default();
        assert_eq!(render_block(&block, &theme), render_block(&block, &theme));
    }
}
