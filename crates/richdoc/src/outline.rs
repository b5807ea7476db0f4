//! Heading outline for section navigation.

use std::collections::HashMap;

use ecow::{eco_format, EcoString};
use serde::Serialize;

use crate::model::{ContentNode, CourseContent, HeadingTag, LegacyBlock};

/// One heading of a rendered course page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Semantic level, 1 for the top.
    pub level: u8,
    /// Plain heading text.
    pub text: EcoString,
    /// Unique anchor id within the page.
    pub anchor: EcoString,
}

/// Allocates unique anchor ids from heading text.
#[derive(Debug, Default)]
pub struct Anchors {
    seen: HashMap<EcoString, usize>,
}

impl Anchors {
    /// Creates an empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor for `text`, suffixed with `-1`, `-2`, ... on repeats.
    pub fn allocate(&mut self, text: &str) -> EcoString {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let anchor = if *count == 0 {
            base
        } else {
            eco_format!("{base}-{count}")
        };
        *count += 1;
        anchor
    }
}

/// Lowercase ASCII slug; runs of other characters collapse into one `-`.
pub fn slugify(text: &str) -> EcoString {
    let mut slug = EcoString::new();
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "section".into()
    } else {
        slug
    }
}

/// Collects the headings of the content that would be rendered, in order.
///
/// Non-empty legacy blocks win over the document, as in rendering.
pub fn outline(content: &CourseContent) -> Vec<OutlineEntry> {
    let mut anchors = Anchors::new();
    let mut entries = Vec::new();

    if content.uses_legacy() {
        for block in &content.legacy {
            if let LegacyBlock::Heading { level, text } = block {
                entries.push(OutlineEntry {
                    level: level.unwrap_or(3).max(1),
                    text: text.clone(),
                    anchor: anchors.allocate(text),
                });
            }
        }
        return entries;
    }

    if let Some(document) = &content.document {
        for node in &document.children {
            collect_headings(node, &mut anchors, &mut entries);
        }
    }
    entries
}

fn collect_headings(node: &ContentNode, anchors: &mut Anchors, entries: &mut Vec<OutlineEntry>) {
    match node {
        // Rendered as literal text.
        ContentNode::Code { .. } => return,
        ContentNode::Heading { tag, .. } => {
            let text = node.plain_text();
            entries.push(OutlineEntry {
                level: match tag {
                    HeadingTag::H1 => 1,
                    HeadingTag::H2 => 2,
                    HeadingTag::Other => 3,
                },
                anchor: anchors.allocate(&text),
                text,
            });
        }
        _ => {}
    }

    for child in node.children() {
        collect_headings(child, anchors, entries);
    }
}
