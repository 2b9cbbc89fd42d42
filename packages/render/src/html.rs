//! VNode → HTML serialization.
//!
//! Deterministic string output for the publish pipeline and for preview
//! embedding. Text and attribute values are escaped with `html-escape`.

use crate::vdom::VNode;
use blockpress_model::PageContent;

/// Elements with no closing tag.
fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

/// Serialize one node (and its subtree) to HTML.
pub fn node_to_html(node: &VNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize a full page: visible blocks wrapped in a page container
/// carrying the theme's font family.
pub fn render_page_html(content: &PageContent) -> String {
    let mut out = String::from("<div class=\"bp-page\"");
    if let Some(font_family) = &content.theme.font_family {
        out.push_str(" style=\"font-family: ");
        out.push_str(&html_escape::encode_double_quoted_attribute(font_family));
        out.push_str("\"");
    }
    out.push('>');

    for node in crate::render::render_page(content) {
        write_node(&node, &mut out);
    }

    out.push_str("</div>");
    out
}

fn write_node(node: &VNode, out: &mut String) {
    match node {
        VNode::Text { content } => {
            out.push_str(&html_escape::encode_text(content));
        }
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            out.push('<');
            out.push_str(tag);

            for (name, value) in attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }

            if !styles.is_empty() {
                out.push_str(" style=\"");
                for (i, (property, value)) in styles.iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    out.push_str(property);
                    out.push_str(": ");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                }
                out.push('"');
            }

            if is_void(tag) {
                out.push_str("/>");
                return;
            }

            out.push('>');
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}
