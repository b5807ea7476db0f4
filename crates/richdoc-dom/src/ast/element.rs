//! Element and attribute definitions for the display tree.

use ecow::EcoString;
use serde::Serialize;

use super::node::{is_block_tag, is_container_tag, Node};

/// Element attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name
    pub name: EcoString,
    /// Attribute value
    pub value: EcoString,
}

/// Display element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Tag name
    pub tag: EcoString,
    /// Stable key identifying this element among its siblings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<EcoString>,
    /// Attributes, in insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Child nodes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Whether this is a void element (`<img />`, `<br />`)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub self_closing: bool,
}

impl Element {
    /// Create a new element
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Create a new void element
    pub fn void(tag: &str) -> Self {
        Self::new(tag).self_closing(true)
    }

    /// Set the key of the element
    pub fn with_key(mut self, key: impl Into<EcoString>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add an attribute to the element
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add an attribute to the element when `value` is present
    pub fn with_optional_attribute(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_attribute(name, value),
            None => self,
        }
    }

    /// Replace the child nodes of the element
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set whether the element is self-closing
    pub fn self_closing(mut self, is_self_closing: bool) -> Self {
        self.self_closing = is_self_closing;
        self
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&EcoString> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// Check if this element's tag matches any in the provided list (case-insensitive)
    pub fn tag_matches_any<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .any(|tag| tag.as_ref().eq_ignore_ascii_case(&self.tag))
    }

    /// Check if the element is laid out as a block
    pub fn is_block(&self) -> bool {
        is_block_tag(&self.tag)
    }

    /// Check if the element holds block children
    pub fn is_container(&self) -> bool {
        is_container_tag(&self.tag)
    }
}
