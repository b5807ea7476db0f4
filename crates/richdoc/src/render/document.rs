use ecow::EcoString;
use richdoc_dom::{Element, Node};

use super::path::NodePath;
use super::Renderer;
use crate::model::{ContentNode, Document, HeadingTag, TextFormat};

impl Renderer {
    pub(crate) fn render_document(&mut self, document: &Document) -> Vec<Node> {
        let mut out = Vec::new();
        for (index, node) in document.children.iter().enumerate() {
            self.render_node(node, &NodePath::root(index), &mut out);
        }
        out
    }

    fn render_children(&mut self, children: &[ContentNode], path: &NodePath) -> Vec<Node> {
        let mut out = Vec::new();
        for (index, child) in children.iter().enumerate() {
            self.render_node(child, &path.child(index), &mut out);
        }
        out
    }

    /// Renders one node into `out`; a node may emit zero, one or (when it
    /// passes its children through) several nodes.
    fn render_node(&mut self, node: &ContentNode, path: &NodePath, out: &mut Vec<Node>) {
        match node {
            ContentNode::Text { text, format } => out.extend(render_text(text, *format, path)),
            ContentNode::Paragraph { children } => self.render_paragraph(children, path, out),
            ContentNode::Heading { tag, children } => {
                let tag = match tag {
                    HeadingTag::H1 => "h2",
                    HeadingTag::H2 => "h3",
                    HeadingTag::Other => "h4",
                };
                let class = self.options.heading_margin_class.clone();
                let heading = self.heading(tag, path.key(), &class, &node.plain_text());
                let children = self.render_children(children, path);
                out.push(heading.with_children(children).into());
            }
            ContentNode::List { ordered, children } => {
                let items = self.render_children(children, path);
                let list = Element::new(if *ordered { "ol" } else { "ul" })
                    .with_key(path.key())
                    .with_children(items);
                out.push(list.into());
            }
            ContentNode::ListItem { children } => {
                let content = self.render_children(children, path);
                out.push(
                    Element::new("li")
                        .with_key(path.key())
                        .with_children(content)
                        .into(),
                );
            }
            ContentNode::Quote {
                children,
                attribution,
            } => {
                let content = self.render_children(children, path);
                let mut quote = Element::new("blockquote")
                    .with_key(path.key())
                    .with_children(content);
                if let Some(attribution) = attribution {
                    quote = quote.with_child(
                        Element::new("footer")
                            .with_key(path.part("footer"))
                            .with_child(Node::text(attribution.clone())),
                    );
                }
                out.push(quote.into());
            }
            ContentNode::Code { language, .. } => {
                out.push(
                    self.code_block(path, language.as_deref(), node.plain_text())
                        .into(),
                );
            }
            ContentNode::Image {
                src, alt, caption, ..
            } => {
                let Some(src) = src else {
                    self.skip(path, "image without a URL");
                    return;
                };
                let mut figure = Element::new("figure").with_key(path.key()).with_child(
                    self.image(path.part("img"), src, alt.as_deref().unwrap_or("")),
                );
                if let Some(caption) = caption {
                    figure = figure.with_child(
                        Element::new("figcaption")
                            .with_key(path.part("caption"))
                            .with_child(Node::text(caption.clone())),
                    );
                }
                out.push(figure.into());
            }
            ContentNode::Upload { media } => match media.resolve() {
                Some(image) => out.push(self.image(path.key(), &image.url, &image.alt).into()),
                None => self.skip(path, "upload without a resolvable URL"),
            },
            ContentNode::LineBreak => out.push(Element::void("br").with_key(path.key()).into()),
            ContentNode::Link {
                url,
                new_tab,
                children,
            } => {
                let content = self.render_children(children, path);
                let Some(url) = url else {
                    self.note(path, "link without a URL, keeping its content");
                    out.extend(content);
                    return;
                };
                let mut link = Element::new("a")
                    .with_key(path.key())
                    .with_attribute("href", url);
                if *new_tab {
                    link = link
                        .with_attribute("target", "_blank")
                        .with_attribute("rel", "noopener noreferrer");
                }
                out.push(link.with_children(content).into());
            }
            ContentNode::Unknown { kind, children } => {
                self.note(path, ecow::eco_format!("unknown node type {kind:?}"));
                let content = self.render_children(children, path);
                out.extend(content);
            }
            ContentNode::Malformed => self.skip(path, "node is not an object"),
            ContentNode::Truncated => self.skip(path, "node exceeds the nesting limit"),
        }
    }

    /// Block-level children turn the paragraph into a container, since a
    /// `<p>` cannot hold them.
    fn render_paragraph(&mut self, children: &[ContentNode], path: &NodePath, out: &mut Vec<Node>) {
        if !children.iter().any(ContentNode::is_block_level) {
            let content = self.render_children(children, path);
            out.push(
                Element::new("p")
                    .with_key(path.key())
                    .with_children(content)
                    .into(),
            );
            return;
        }

        let mut lines = Vec::with_capacity(children.len());
        for (index, child) in children.iter().enumerate() {
            let child_path = path.child(index);
            match child {
                ContentNode::Text { text, format } => {
                    if let Some(text) = render_text(text, *format, &child_path) {
                        lines.push(
                            Element::new("p")
                                .with_key(child_path.part("p"))
                                .with_child(text)
                                .into(),
                        );
                    }
                }
                _ => self.render_node(child, &child_path, &mut lines),
            }
        }

        if !lines.is_empty() {
            out.push(
                Element::new("div")
                    .with_key(path.key())
                    .with_children(lines)
                    .into(),
            );
        }
    }
}

/// Wraps the text in one element per format flag, innermost first. Empty text
/// emits nothing.
fn render_text(text: &EcoString, format: TextFormat, path: &NodePath) -> Option<Node> {
    if text.is_empty() {
        return None;
    }

    let mut node = Node::Text(text.clone());
    for tag in format.wrappers() {
        node = Element::new(tag)
            .with_key(path.part(tag))
            .with_child(node)
            .into();
    }
    Some(node)
}
