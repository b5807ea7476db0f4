//! The recursive rich-text document.

use ecow::EcoString;
use serde_json::{Map, Value};

use super::format::TextFormat;
use super::media::{first_str, non_empty_str, MediaRef};

/// Default nesting limit for documents read from a CMS payload.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// The semantic level of a heading node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingTag {
    /// `h1`
    H1,
    /// `h2`
    H2,
    /// `h3` and anything else, including a missing tag
    Other,
}

impl HeadingTag {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("h1") => HeadingTag::H1,
            Some("h2") => HeadingTag::H2,
            _ => HeadingTag::Other,
        }
    }
}

/// The two node kinds rendered from a direct image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// `image`
    Image,
    /// `course-image`
    CourseImage,
}

/// One node of a rich-text document, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    /// Formatted text leaf.
    Text {
        /// The text, possibly empty.
        text: EcoString,
        /// Inline formatting flags.
        format: TextFormat,
    },
    /// A paragraph of inline or block children.
    Paragraph {
        /// Child nodes.
        children: Vec<ContentNode>,
    },
    /// A heading.
    Heading {
        /// Semantic level.
        tag: HeadingTag,
        /// Child nodes.
        children: Vec<ContentNode>,
    },
    /// An ordered or unordered list.
    List {
        /// Whether `listType` is `number`.
        ordered: bool,
        /// Child nodes, normally list items.
        children: Vec<ContentNode>,
    },
    /// A list item.
    ListItem {
        /// Child nodes.
        children: Vec<ContentNode>,
    },
    /// A block quote.
    Quote {
        /// Child nodes.
        children: Vec<ContentNode>,
        /// Optional attribution shown below the quote.
        attribution: Option<EcoString>,
    },
    /// A code block whose children are taken as literal text.
    Code {
        /// Optional language name.
        language: Option<EcoString>,
        /// Child nodes.
        children: Vec<ContentNode>,
    },
    /// An image with a direct URL field.
    Image {
        /// `image` or `course-image`.
        kind: ImageKind,
        /// The direct URL, if any.
        src: Option<EcoString>,
        /// Alternative text.
        alt: Option<EcoString>,
        /// Caption shown below the image.
        caption: Option<EcoString>,
    },
    /// A media upload reference.
    Upload {
        /// The referenced media object.
        media: MediaRef,
    },
    /// A hard line break.
    LineBreak,
    /// A hyperlink around its children.
    Link {
        /// Target URL, if any.
        url: Option<EcoString>,
        /// Whether the link opens in a new tab.
        new_tab: bool,
        /// Child nodes.
        children: Vec<ContentNode>,
    },
    /// A node of an unrecognized (or missing) type; only its children render.
    Unknown {
        /// The `type` field, empty when absent.
        kind: EcoString,
        /// Child nodes.
        children: Vec<ContentNode>,
    },
    /// A value that is not an object.
    Malformed,
    /// A subtree cut off by the nesting limit.
    Truncated,
}

impl ContentNode {
    /// Reads a node, never failing. See [`Document::from_value_with_limit`].
    pub fn from_value(value: &Value, depth_left: usize) -> Self {
        let Some(object) = value.as_object() else {
            return ContentNode::Malformed;
        };
        if depth_left == 0 {
            return ContentNode::Truncated;
        }

        let children = || parse_children(object, depth_left - 1);
        match object.get("type").and_then(Value::as_str).unwrap_or_default() {
            "text" => ContentNode::Text {
                text: object
                    .get("text")
                    .and_then(Value::as_str)
                    .map(EcoString::from)
                    .unwrap_or_default(),
                format: TextFormat::from_value(object.get("format")),
            },
            "paragraph" => ContentNode::Paragraph {
                children: children(),
            },
            "heading" => ContentNode::Heading {
                tag: HeadingTag::from_value(object.get("tag")),
                children: children(),
            },
            "list" => ContentNode::List {
                ordered: object.get("listType").and_then(Value::as_str) == Some("number"),
                children: children(),
            },
            "listitem" => ContentNode::ListItem {
                children: children(),
            },
            "quote" => ContentNode::Quote {
                children: children(),
                attribution: non_empty_str(object, "attribution"),
            },
            "code" => ContentNode::Code {
                language: non_empty_str(object, "language"),
                children: children(),
            },
            kind @ ("image" | "course-image") => ContentNode::Image {
                kind: if kind == "image" {
                    ImageKind::Image
                } else {
                    ImageKind::CourseImage
                },
                src: first_str(object, &["src", "url"]),
                alt: first_str(object, &["altText", "alt"]),
                caption: non_empty_str(object, "caption"),
            },
            "upload" => ContentNode::Upload {
                media: MediaRef::from_value(object.get("value")),
            },
            "linebreak" => ContentNode::LineBreak,
            "link" => ContentNode::Link {
                url: object
                    .get("fields")
                    .and_then(Value::as_object)
                    .and_then(|fields| non_empty_str(fields, "url"))
                    .or_else(|| non_empty_str(object, "url")),
                new_tab: object
                    .get("fields")
                    .and_then(|fields| fields.get("newTab"))
                    .or_else(|| object.get("newTab"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                children: children(),
            },
            kind => ContentNode::Unknown {
                kind: kind.into(),
                children: children(),
            },
        }
    }

    /// Whether the node forces its parent paragraph into container mode.
    pub fn is_block_level(&self) -> bool {
        matches!(
            self,
            ContentNode::Image { .. }
                | ContentNode::List { .. }
                | ContentNode::Quote { .. }
                | ContentNode::Code { .. }
                | ContentNode::Upload { .. }
        )
    }

    /// The child nodes, empty for leaves.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Paragraph { children }
            | ContentNode::Heading { children, .. }
            | ContentNode::List { children, .. }
            | ContentNode::ListItem { children }
            | ContentNode::Quote { children, .. }
            | ContentNode::Code { children, .. }
            | ContentNode::Link { children, .. }
            | ContentNode::Unknown { children, .. } => children,
            ContentNode::Text { .. }
            | ContentNode::Image { .. }
            | ContentNode::Upload { .. }
            | ContentNode::LineBreak
            | ContentNode::Malformed
            | ContentNode::Truncated => &[],
        }
    }

    /// Concatenated literal text of the subtree; line breaks become `\n`.
    pub fn plain_text(&self) -> EcoString {
        let mut buffer = EcoString::new();
        self.collect_text(&mut buffer);
        buffer
    }

    fn collect_text(&self, buffer: &mut EcoString) {
        match self {
            ContentNode::Text { text, .. } => buffer.push_str(text),
            ContentNode::LineBreak => buffer.push('\n'),
            node => {
                for child in node.children() {
                    child.collect_text(buffer);
                }
            }
        }
    }
}

fn parse_children(object: &Map<String, Value>, depth_left: usize) -> Vec<ContentNode> {
    match object.get("children").and_then(Value::as_array) {
        Some(children) => children
            .iter()
            .map(|child| ContentNode::from_value(child, depth_left))
            .collect(),
        None => Vec::new(),
    }
}

/// A rich-text document: the children of its root node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Top-level nodes in order.
    pub children: Vec<ContentNode>,
}

impl Document {
    /// Reads a document with the default nesting limit.
    pub fn from_value(value: &Value) -> Self {
        Self::from_value_with_limit(value, DEFAULT_MAX_DEPTH)
    }

    /// Reads a document, never failing.
    ///
    /// Accepts `{"root": {"children": [..]}}`, a bare node with `children`, or
    /// an array of nodes. Anything else is an empty document. Nodes nested
    /// deeper than `max_depth` are replaced by [`ContentNode::Truncated`].
    pub fn from_value_with_limit(value: &Value, max_depth: usize) -> Self {
        let root = value.get("root").unwrap_or(value);
        let children = match root {
            Value::Array(nodes) => nodes
                .iter()
                .map(|node| ContentNode::from_value(node, max_depth))
                .collect(),
            Value::Object(object) => parse_children(object, max_depth),
            _ => Vec::new(),
        };
        Self { children }
    }

    /// Whether the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
