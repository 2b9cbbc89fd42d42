//! Virtual DOM output of the block renderer.
//!
//! Attribute and style entries are ordered pairs rather than maps so the
//! serialized HTML is byte-for-byte deterministic for identical input.

use serde::{Deserialize, Serialize};

/// Virtual DOM node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VNode {
    /// HTML element.
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        styles: Vec<(String, String)>,
        children: Vec<VNode>,
    },

    /// Text node.
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.push((property.into(), value.into()));
        }
        self
    }

    pub fn with_opt_style(self, property: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.with_style(property, value),
            None => self,
        }
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Attribute lookup, mostly for tests.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            VNode::Text { .. } => None,
        }
    }

    /// Inline style lookup, mostly for tests.
    pub fn style(&self, property: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.as_str()),
            VNode::Text { .. } => None,
        }
    }
}
