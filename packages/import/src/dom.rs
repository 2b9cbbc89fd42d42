//! Best-effort DOM tree construction.
//!
//! Builds a node tree from the token stream without ever failing:
//! unmatched close tags are dropped, unclosed elements are closed at end
//! of input, and void elements never take children.

use crate::tokenizer::{parse_close_tag, parse_open_tag, RawToken, Tag};
use logos::Logos;

#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<HtmlNode>,
    },
    Text(String),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Element { tag, .. } => Some(tag),
            HtmlNode::Text(_) => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            HtmlNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            HtmlNode::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Element { children, .. } => children,
            HtmlNode::Text(_) => &[],
        }
    }

    /// Concatenated descendant text with collapsed whitespace.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        collapse_whitespace(&out)
    }
}

fn collect_text(node: &HtmlNode, out: &mut String) {
    match node {
        HtmlNode::Text(text) => out.push_str(text),
        HtmlNode::Element { children, .. } => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

/// Tags that implicitly close an open sibling of the same name, so
/// `<li>a<li>b` nests as siblings rather than a chain.
fn closes_same_tag(tag: &str) -> bool {
    matches!(tag, "li" | "p" | "option" | "tr" | "td" | "th")
}

/// Parse markup into a forest of nodes. Never fails; the worst input
/// yields an empty forest.
pub fn parse_html(input: &str) -> Vec<HtmlNode> {
    let mut builder = TreeBuilder::default();

    for token in RawToken::lexer(input).flatten() {
        match token {
            RawToken::OpenTag(raw) => builder.open(parse_open_tag(raw)),
            RawToken::CloseTag(raw) => builder.close(&parse_close_tag(raw)),
            RawToken::Text(text) => builder.text(text),
            RawToken::Stray => builder.text("<"),
            RawToken::Comment | RawToken::Doctype => {}
        }
    }

    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    /// Open-element stack; each frame owns its accumulated children.
    stack: Vec<(String, Vec<(String, String)>, Vec<HtmlNode>)>,
    roots: Vec<HtmlNode>,
}

impl TreeBuilder {
    fn open(&mut self, tag: Tag) {
        if closes_same_tag(&tag.name) {
            if let Some((open_tag, _, _)) = self.stack.last() {
                if *open_tag == tag.name {
                    self.pop();
                }
            }
        }

        if tag.self_closing || is_void(&tag.name) {
            self.append(HtmlNode::Element {
                tag: tag.name,
                attributes: tag.attributes,
                children: Vec::new(),
            });
            return;
        }

        self.stack.push((tag.name, tag.attributes, Vec::new()));
    }

    fn close(&mut self, name: &str) {
        // Pop to the nearest matching open element; a close tag with no
        // match is dropped rather than closing anything else.
        if !self.stack.iter().any(|(tag, _, _)| tag == name) {
            return;
        }
        while let Some((tag, _, _)) = self.stack.last() {
            let done = tag.as_str() == name;
            self.pop();
            if done {
                break;
            }
        }
    }

    fn text(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.append(HtmlNode::Text(text.to_string()));
    }

    fn pop(&mut self) {
        if let Some((tag, attributes, children)) = self.stack.pop() {
            self.append(HtmlNode::Element {
                tag,
                attributes,
                children,
            });
        }
    }

    fn append(&mut self, node: HtmlNode) {
        match self.stack.last_mut() {
            Some((_, _, children)) => children.push(node),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self) -> Vec<HtmlNode> {
        while !self.stack.is_empty() {
            self.pop();
        }
        self.roots
    }
}
