//! Node definitions for the display tree.

use ecow::EcoString;
use serde::Serialize;

use super::element::Element;

/// Tags laid out as blocks by browsers. The HTML writer ends these with a
/// newline.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "br",
    "div",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "ul",
];

/// Block tags whose children are themselves blocks. The HTML writer starts
/// their content on a fresh line.
const CONTAINER_TAGS: &[&str] = &[
    "article",
    "aside",
    "blockquote",
    "div",
    "figure",
    "ol",
    "section",
    "ul",
];

/// Main node type, representing an element of the display tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// An element with a tag, attributes and children
    Element(Element),
    /// Plain text, escaped on output
    Text(EcoString),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<EcoString>) -> Self {
        Node::Text(text.into())
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Check if a node is laid out as a block.
    pub fn is_block(&self) -> bool {
        match self {
            Node::Element(element) => element.is_block(),
            Node::Text(_) => false,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

pub(crate) fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.iter().any(|block| block.eq_ignore_ascii_case(tag))
}

pub(crate) fn is_container_tag(tag: &str) -> bool {
    CONTAINER_TAGS
        .iter()
        .any(|container| container.eq_ignore_ascii_case(tag))
}
