use richdoc_dom::{Element, Node};

use super::path::NodePath;
use super::{plain_text, Renderer};
use crate::model::LegacyBlock;

impl Renderer {
    pub(crate) fn render_legacy(&mut self, blocks: &[LegacyBlock]) -> Vec<Node> {
        let mut out = Vec::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            let path = NodePath::root(index);
            if let Some(element) = self.render_block(block, index, &path) {
                out.push(element.into());
            }
        }
        out
    }

    fn render_block(&mut self, block: &LegacyBlock, index: usize, path: &NodePath) -> Option<Element> {
        let element = match block {
            LegacyBlock::Heading { level, text } => {
                let tag = match level {
                    Some(1) => "h2",
                    Some(2) => "h3",
                    _ => "h4",
                };
                // Only the first block sits flush against the page title.
                let class = if index == 0 {
                    self.options.first_heading_class.clone()
                } else {
                    self.options.heading_margin_class.clone()
                };
                self.heading(tag, path.key(), &class, text)
                    .with_children(plain_text(text.clone()))
            }
            LegacyBlock::Paragraph { text } => Element::new("p")
                .with_key(path.key())
                .with_children(plain_text(text.clone())),
            LegacyBlock::List { ordered, items } => {
                let items = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        Element::new("li")
                            .with_key(path.child(i).key())
                            .with_children(plain_text(item.clone()))
                            .into()
                    })
                    .collect();
                Element::new(if *ordered { "ol" } else { "ul" })
                    .with_key(path.key())
                    .with_children(items)
            }
            LegacyBlock::Image { url, alt, caption } => {
                let Some(url) = url else {
                    self.skip(path, "legacy image block without a URL");
                    return None;
                };
                let mut figure = Element::new("figure")
                    .with_key(path.key())
                    .with_child(self.image(path.part("img"), url, alt.as_deref().unwrap_or("")));
                if let Some(caption) = caption {
                    figure = figure.with_child(
                        Element::new("figcaption")
                            .with_key(path.part("caption"))
                            .with_child(Node::text(caption.clone())),
                    );
                }
                figure
            }
            LegacyBlock::Quote { text, attribution } => {
                let mut quote = Element::new("blockquote").with_key(path.key()).with_child(
                    Element::new("p")
                        .with_key(path.part("p"))
                        .with_children(plain_text(text.clone())),
                );
                if let Some(attribution) = attribution {
                    quote = quote.with_child(
                        Element::new("footer")
                            .with_key(path.part("footer"))
                            .with_child(Node::text(attribution.clone())),
                    );
                }
                quote
            }
            LegacyBlock::Code { code, language } => {
                self.code_block(path, language.as_deref(), code.clone())
            }
            LegacyBlock::Unknown => {
                self.note(path, "unknown legacy block");
                return None;
            }
        };
        Some(element)
    }
}
