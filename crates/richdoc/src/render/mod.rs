//! The rich-document renderer.
//!
//! Rendering is a pure transform from [`CourseContent`] into display nodes.
//! It never fails: malformed or unresolvable nodes are dropped (or replaced
//! by their children) and reported to the diagnostic sink.

mod document;
mod legacy;
mod path;

use ecow::EcoString;
use richdoc_dom::{Diagnostic, DiagnosticSink, Element, Node, NullSink};

use crate::config::RenderOptions;
use crate::model::CourseContent;
use crate::outline::Anchors;

use self::path::NodePath;

/// Renders course content into display nodes.
///
/// ```rust
/// use richdoc::{CourseContent, Renderer};
/// use serde_json::json;
///
/// let legacy = json!([{ "type": "paragraph", "text": "Welcome" }]);
/// let content = CourseContent::from_values(Some(&legacy), None, 64);
///
/// let nodes = Renderer::new().render(&content).unwrap();
/// assert_eq!(nodes.len(), 1);
/// ```
pub struct Renderer {
    options: RenderOptions,
    diagnostics: Box<dyn DiagnosticSink + 'static>,
    anchors: Anchors,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer with default options.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Creates a renderer with the specified options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            diagnostics: Box::new(NullSink),
            anchors: Anchors::new(),
        }
    }

    /// Replace the diagnostic sink used to report dropped nodes.
    pub fn with_diagnostic_sink(mut self, sink: Box<dyn DiagnosticSink + 'static>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Renders the content, or returns `None` when nothing is renderable.
    ///
    /// Non-empty legacy blocks take precedence; otherwise the document is
    /// rendered.
    pub fn render(&mut self, content: &CourseContent) -> Option<Vec<Node>> {
        self.anchors = Anchors::new();

        let nodes = if content.uses_legacy() {
            self.render_legacy(&content.legacy)
        } else if let Some(document) = &content.document {
            self.render_document(document)
        } else {
            Vec::new()
        };

        if nodes.is_empty() {
            log::debug!("content produced no output");
            None
        } else {
            Some(nodes)
        }
    }

    fn skip(&mut self, path: &NodePath, message: impl Into<EcoString>) {
        let diagnostic = Diagnostic::warning(message).at(path.key());
        log::debug!("skipped node {}: {}", path.key(), diagnostic.message);
        self.diagnostics.emit(diagnostic);
    }

    fn note(&mut self, path: &NodePath, message: impl Into<EcoString>) {
        let diagnostic = Diagnostic::info(message).at(path.key());
        log::trace!("node {}: {}", path.key(), diagnostic.message);
        self.diagnostics.emit(diagnostic);
    }

    fn image(&self, key: EcoString, url: &str, alt: &str) -> Element {
        Element::void("img")
            .with_key(key)
            .with_attribute("src", url)
            .with_attribute("alt", alt)
            .with_attribute("style", &self.options.image_style())
    }

    fn heading(&mut self, tag: &str, key: EcoString, class: &str, text: &str) -> Element {
        let heading = Element::new(tag).with_key(key).with_attribute("class", class);
        if self.options.heading_ids {
            let anchor = self.anchors.allocate(text);
            heading.with_attribute("id", &anchor)
        } else {
            heading
        }
    }

    fn code_block(&self, path: &NodePath, language: Option<&str>, code: EcoString) -> Element {
        let class = self
            .options
            .code_language_class_prefix
            .as_ref()
            .zip(language)
            .map(|(prefix, language)| ecow::eco_format!("{prefix}{}", language.trim()));

        let code = Element::new("code")
            .with_key(path.part("code"))
            .with_optional_attribute("class", class.as_deref())
            .with_children(plain_text(code));
        Element::new("pre").with_key(path.key()).with_child(code)
    }
}

/// Renders content with the given options and no diagnostics.
pub fn render_content(content: &CourseContent, options: &RenderOptions) -> Option<Vec<Node>> {
    Renderer::with_options(options.clone()).render(content)
}

/// A text child, or none for empty text.
fn plain_text(text: EcoString) -> Vec<Node> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Node::Text(text)]
    }
}
