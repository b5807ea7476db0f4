//! Content model of both CMS formats.
//!
//! Both formats are read leniently from `serde_json::Value`: wrong-typed or
//! missing fields become absent values and unknown kinds are kept as such, so
//! reading never fails and the renderer decides how each shape degrades.

mod format;
mod legacy;
mod media;
mod node;

pub use self::format::TextFormat;
pub use self::legacy::LegacyBlock;
pub use self::media::{MediaRef, ResolvedImage, MEDIA_URL_FIELDS};
pub use self::node::{ContentNode, Document, HeadingTag, ImageKind, DEFAULT_MAX_DEPTH};

use serde_json::Value;

/// Course content as delivered by the CMS: either or both formats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseContent {
    /// The legacy flat blocks, one per source entry; takes precedence when
    /// non-empty.
    pub legacy: Vec<LegacyBlock>,
    /// The recursive document, if any.
    pub document: Option<Document>,
}

impl CourseContent {
    /// Reads both formats, each optional.
    pub fn from_values(legacy: Option<&Value>, document: Option<&Value>, max_depth: usize) -> Self {
        Self {
            legacy: legacy.map(LegacyBlock::parse_blocks).unwrap_or_default(),
            document: document
                .filter(|value| !value.is_null())
                .map(|value| Document::from_value_with_limit(value, max_depth)),
        }
    }

    /// Reads both formats from a course payload addressed by JSON pointers,
    /// e.g. `/legacyContent` and `/content`.
    pub fn from_payload(
        payload: &Value,
        legacy_pointer: &str,
        document_pointer: &str,
        max_depth: usize,
    ) -> Self {
        Self::from_values(
            payload.pointer(legacy_pointer),
            payload.pointer(document_pointer),
            max_depth,
        )
    }

    /// Whether the legacy path applies. A non-empty legacy array hides the
    /// document even when none of its blocks renders.
    pub fn uses_legacy(&self) -> bool {
        !self.legacy.is_empty()
    }
}
