use ecow::EcoString;

/// Options for configuring the HTML rendering process.
///
/// # Example
///
/// ```rust
/// use richdoc_dom::{HtmlWriter, HtmlWriterOptions};
///
/// let options = HtmlWriterOptions {
///     strict: false,
///     emit_keys: true,
///     ..Default::default()
/// };
///
/// let mut writer = HtmlWriter::with_options(options);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlWriterOptions {
    /// Writes element keys as an attribute named by `key_attribute`.
    pub emit_keys: bool,

    /// Attribute name used for element keys when `emit_keys` is set.
    pub key_attribute: EcoString,

    /// Tags that are always written as escaped text instead of markup.
    pub disallowed_tags: Vec<EcoString>,

    /// Determines if invalid tag or attribute names are errors (strict) or
    /// are textualized with a warning (lenient).
    pub strict: bool,
}

impl Default for HtmlWriterOptions {
    fn default() -> Self {
        Self {
            emit_keys: false,
            key_attribute: "data-key".into(),
            disallowed_tags: vec!["script".into(), "style".into(), "iframe".into()],
            strict: true,
        }
    }
}

impl HtmlWriterOptions {
    /// Sets whether element keys are written.
    pub fn with_keys(mut self, emit_keys: bool) -> Self {
        self.emit_keys = emit_keys;
        self
    }

    /// Sets strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
