use super::{utils, HtmlWriteError, HtmlWriteResult, HtmlWriterOptions};
use crate::ast::{Element, Node};
use crate::writer::runtime::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::writer::runtime::visitor::{walk_node, NodeHandler};
use ecow::EcoString;
use std::fmt;

mod guard;

use guard::{GuardedElement, GuardedTagWriter};

/// Serializes a display tree into an HTML fragment.
///
/// Text is escaped, attribute values are double-quoted, and every block
/// element is followed by a newline so the output diffs line by line.
/// Element names are checked before they are written; see
/// [`HtmlWriterOptions::strict`].
///
/// ```rust
/// use richdoc_dom::{Element, HtmlWriter, Node};
///
/// let mut writer = HtmlWriter::new();
/// let list = Element::new("ul").with_child(Element::new("li").with_child(Node::text("one")));
/// writer.write_node(&list.into()).unwrap();
/// assert_eq!(writer.into_string().unwrap(), "<ul>\n<li>one</li>\n</ul>\n");
/// ```
///
/// The tag methods write markup directly, for callers composing a fragment
/// around rendered nodes:
///
/// ```rust
/// use richdoc_dom::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.start_tag("section").unwrap();
/// writer.attribute("class", "course").unwrap();
/// writer.finish_tag().unwrap();
/// writer.text("Week 1 & 2").unwrap();
/// writer.end_tag("section").unwrap();
/// assert_eq!(
///     writer.into_string().unwrap(),
///     "<section class=\"course\">Week 1 &amp; 2</section>"
/// );
/// ```
pub struct HtmlWriter {
    /// Output options.
    pub options: HtmlWriterOptions,
    pub(crate) buffer: EcoString,
    /// An open tag still awaits its `>`.
    tag_opened: bool,
    diagnostics: Box<dyn DiagnosticSink + 'static>,
}

impl fmt::Debug for HtmlWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlWriter")
            .field("options", &self.options)
            .field("buffer", &self.buffer)
            .field("tag_opened", &self.tag_opened)
            .finish()
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    /// Creates a new HTML writer with default options.
    pub fn new() -> Self {
        Self::with_options(HtmlWriterOptions::default())
    }

    /// Creates a new HTML writer with the specified options.
    pub fn with_options(options: HtmlWriterOptions) -> Self {
        HtmlWriter {
            options,
            buffer: EcoString::new(),
            tag_opened: false,
            diagnostics: Box::new(NullSink),
        }
    }

    /// Replace the diagnostic sink used to capture non-fatal issues.
    pub fn with_diagnostic_sink(mut self, sink: Box<dyn DiagnosticSink + 'static>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub(crate) fn emit_warning<S: Into<EcoString>>(&mut self, message: S) {
        let message = message.into();
        self.diagnostics.emit(Diagnostic::warning(message.clone()));
        log::warn!("{message}");
    }

    pub(crate) fn emit_debug<S: Into<EcoString>>(&mut self, message: S) {
        let message = message.into();
        self.diagnostics.emit(Diagnostic::info(message.clone()));
        log::debug!("{message}");
    }

    /// Consumes the writer and returns the generated HTML string.
    pub fn into_string(mut self) -> HtmlWriteResult<EcoString> {
        self.ensure_tag_closed()?;
        Ok(self.buffer)
    }

    fn ensure_tag_closed(&mut self) -> HtmlWriteResult<()> {
        if self.tag_opened {
            self.buffer.push('>');
            self.tag_opened = false;
        }
        Ok(())
    }

    /// Starts an HTML tag with the given name.
    pub fn start_tag(&mut self, tag_name: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push('<');
        self.buffer.push_str(tag_name);
        self.tag_opened = true;
        Ok(())
    }

    /// Adds an attribute to the currently open tag.
    pub fn attribute(&mut self, key: &str, value: &str) -> HtmlWriteResult<()> {
        if !self.tag_opened {
            return Err(HtmlWriteError::InvalidStructure(
                "Cannot write attribute: no tag is currently open.".to_string(),
            ));
        }
        self.buffer.push(' ');
        self.buffer.push_str(key);
        self.buffer.push_str("=\"");
        self.buffer
            .push_str(html_escape::encode_double_quoted_attribute(value).as_ref());
        self.buffer.push('"');
        Ok(())
    }

    /// Finishes the current open tag.
    pub fn finish_tag(&mut self) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()
    }

    /// Closes an HTML tag with the given name.
    pub fn end_tag(&mut self, tag_name: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push_str("</");
        self.buffer.push_str(tag_name);
        self.buffer.push('>');
        Ok(())
    }

    /// Writes text content, escaping HTML special characters.
    pub fn text(&mut self, text: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push_str(html_escape::encode_text(text).as_ref());
        Ok(())
    }

    /// Finishes the current open tag as a self-closing tag.
    pub fn finish_self_closing_tag(&mut self) -> HtmlWriteResult<()> {
        if !self.tag_opened {
            return Err(HtmlWriteError::InvalidStructure(
                "Cannot finish self-closing tag: no tag is currently open.".to_string(),
            ));
        }
        self.buffer.push_str(" />");
        self.tag_opened = false;
        Ok(())
    }

    /// Writes HTML content that is trusted to be well-formed and safe.
    ///
    /// Only fragments synthesised by the writer itself (structural newlines)
    /// go through here. Document text goes through [`Self::text`].
    pub fn write_trusted_html(&mut self, html: &str) -> HtmlWriteResult<()> {
        self.ensure_tag_closed()?;
        self.buffer.push_str(html);
        Ok(())
    }

    fn guard_element<'a>(&'a mut self, element: &Element) -> HtmlWriteResult<GuardedElement<'a>> {
        if element.tag_matches_any(&self.options.disallowed_tags) {
            self.emit_debug(format!("Textualizing disallowed tag: <{}>", element.tag));
            return Ok(GuardedElement::Textualize);
        }

        if !utils::is_safe_tag_name(&element.tag) {
            if self.options.strict {
                return Err(HtmlWriteError::InvalidHtmlTag(element.tag.to_string()));
            }

            self.emit_warning(format!(
                "Invalid HTML tag name '{}' encountered. Textualizing in non-strict mode.",
                element.tag
            ));
            return Ok(GuardedElement::Textualize);
        }

        for attr in &element.attributes {
            if !utils::is_safe_attribute_name(&attr.name) {
                if self.options.strict {
                    return Err(HtmlWriteError::InvalidHtmlAttribute(attr.name.to_string()));
                }

                self.emit_warning(format!(
                    "Invalid attribute name '{}' encountered. Textualizing element in non-strict mode.",
                    attr.name
                ));
                return Ok(GuardedElement::Textualize);
            }
        }

        self.start_tag(&element.tag)?;
        Ok(GuardedElement::Render(GuardedTagWriter::new(
            self,
            element.tag.clone(),
        )))
    }

    /// Writes a display node to HTML using the configured options.
    pub fn write_node(&mut self, node: &Node) -> HtmlWriteResult<()> {
        walk_node(self, node)
    }

    /// Writes a sequence of sibling nodes.
    pub fn write_nodes(&mut self, nodes: &[Node]) -> HtmlWriteResult<()> {
        NodeHandler::visit_nodes(self, nodes)
    }

    pub(crate) fn write_element(&mut self, element: &Element) -> HtmlWriteResult<()> {
        let emit_keys = self.options.emit_keys;
        let key_attribute = self.options.key_attribute.clone();

        let writer = match self.guard_element(element)? {
            GuardedElement::Textualize => return self.textualize_element(element),
            GuardedElement::Render(mut guard) => {
                if let Some(key) = element.key.as_ref().filter(|_| emit_keys) {
                    guard.write_attribute(&key_attribute, key)?;
                }
                guard.write_attributes(&element.attributes)?;

                if element.self_closing {
                    guard.finish_self_closing()?
                } else {
                    let mut body = guard.finish()?;
                    if element.is_container() && !element.children.is_empty() {
                        body.writer().write_trusted_html("\n")?;
                    }
                    for child in &element.children {
                        body.writer().write_node(child)?;
                    }
                    body.end()?
                }
            }
        };

        if element.is_block() {
            writer.write_trusted_html("\n")?;
        }
        Ok(())
    }

    pub(crate) fn textualize_element(&mut self, element: &Element) -> HtmlWriteResult<()> {
        self.text("<")?;
        self.text(&element.tag)?;
        for attr in &element.attributes {
            self.text(" ")?;
            self.text(&attr.name)?;
            self.text("=")?;
            self.text("\"")?;
            self.text(&attr.value)?;
            self.text("\"")?;
        }
        if element.self_closing {
            self.text(" />")?;
        } else {
            self.text(">")?;
            for child in &element.children {
                self.write_node(child)?;
            }
            self.text("</")?;
            self.text(&element.tag)?;
            self.text(">")?;
        }
        Ok(())
    }
}

impl NodeHandler for HtmlWriter {
    type Error = HtmlWriteError;

    fn element(&mut self, element: &Element) -> HtmlWriteResult<()> {
        self.write_element(element)
    }

    fn text(&mut self, text: &EcoString) -> HtmlWriteResult<()> {
        HtmlWriter::text(self, text)
    }
}
