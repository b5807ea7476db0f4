//! # richdoc
//!
//! Renders course content delivered by a CMS, either as legacy flat blocks
//! or as a recursive rich-text document, into a display tree and HTML.

pub mod config;
mod error;
pub mod model;
pub mod outline;
pub mod render;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::*;

use ecow::EcoString;
use richdoc_dom::{HtmlWriter, HtmlWriterOptions};
use serde_json::Value;

pub use crate::config::{Config, HtmlOptions, RenderOptions};
pub use crate::model::{ContentNode, CourseContent, Document, LegacyBlock, TextFormat};
pub use crate::outline::{outline, OutlineEntry};
pub use crate::render::{render_content, Renderer};
pub use crate::view::{ViewConfig, ViewEvent, ViewState};

pub use richdoc_dom;
pub use richdoc_dom::Node;

/// The result type for richdoc.
pub type Result<T, Err = Error> = std::result::Result<T, Err>;

/// Renders both formats with default options.
///
/// Returns `None` when nothing is renderable; the caller shows its own
/// placeholder then.
pub fn render_values(legacy: Option<&Value>, document: Option<&Value>) -> Option<Vec<Node>> {
    let options = RenderOptions::default();
    let content = CourseContent::from_values(legacy, document, options.max_depth);
    render_content(&content, &options)
}

/// Serializes display nodes to an HTML fragment.
pub fn to_html(nodes: &[Node], options: HtmlWriterOptions) -> Result<EcoString> {
    let mut writer = HtmlWriter::with_options(options);
    writer.write_nodes(nodes)?;
    Ok(writer.into_string()?)
}
