//! Render and output configuration.
//!
//! A configuration file is TOML with two optional tables:
//!
//! ```toml
//! [render]
//! image-width = "60%"
//! heading-ids = true
//!
//! [html]
//! emit-keys = true
//! ```

use std::path::Path;

use ecow::EcoString;
use richdoc_dom::HtmlWriterOptions;
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MAX_DEPTH;
use crate::Result;

/// Options for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    /// Nodes nested deeper than this are dropped.
    pub max_depth: usize,
    /// CSS width of rendered images.
    pub image_width: EcoString,
    /// Class of headings carrying a top margin.
    pub heading_margin_class: EcoString,
    /// Class of a legacy heading in the first position.
    pub first_heading_class: EcoString,
    /// Prefix of the language class on code blocks; `None` adds no class.
    pub code_language_class_prefix: Option<EcoString>,
    /// Adds an `id` to headings, matching the outline anchors.
    pub heading_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            image_width: "50%".into(),
            heading_margin_class: "mt-8".into(),
            first_heading_class: "mt-0".into(),
            code_language_class_prefix: Some("language-".into()),
            heading_ids: false,
        }
    }
}

impl RenderOptions {
    /// Sets the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the CSS width of images.
    pub fn with_image_width(mut self, width: impl Into<EcoString>) -> Self {
        self.image_width = width.into();
        self
    }

    /// Sets whether headings get anchor ids.
    pub fn with_heading_ids(mut self, heading_ids: bool) -> Self {
        self.heading_ids = heading_ids;
        self
    }

    /// Sets the code block language class prefix.
    pub fn with_code_language_class_prefix<S: Into<EcoString>>(mut self, prefix: Option<S>) -> Self {
        self.code_language_class_prefix = prefix.map(Into::into);
        self
    }

    /// The inline style of rendered images.
    pub(crate) fn image_style(&self) -> EcoString {
        ecow::eco_format!("width: {}", self.image_width)
    }
}

/// HTML output options as they appear in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HtmlOptions {
    /// Write element keys as `data-key` attributes.
    pub emit_keys: bool,
    /// Fail on invalid tag or attribute names instead of textualizing them.
    pub strict: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            emit_keys: false,
            strict: true,
        }
    }
}

impl From<&HtmlOptions> for HtmlWriterOptions {
    fn from(options: &HtmlOptions) -> Self {
        HtmlWriterOptions::default()
            .with_keys(options.emit_keys)
            .with_strict(options.strict)
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Renderer options.
    pub render: RenderOptions,
    /// HTML writer options.
    pub html: HtmlOptions,
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| crate::Error::from(err).context(format!("failed to read {path:?}")))?;
        Self::from_toml_str(&text).map_err(|err| err.context(format!("failed to parse {path:?}")))
    }

    /// Options for the HTML writer.
    pub fn writer_options(&self) -> HtmlWriterOptions {
        (&self.html).into()
    }
}
