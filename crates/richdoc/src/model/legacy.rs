//! The legacy flat block format.

use ecow::EcoString;
use serde_json::Value;

use super::media::{first_str, non_empty_str};

/// One block of the legacy flat content format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyBlock {
    /// A heading with a semantic level.
    Heading {
        /// Semantic level, if present and numeric.
        level: Option<u8>,
        /// Plain text.
        text: EcoString,
    },
    /// A paragraph of plain text.
    Paragraph {
        /// Plain text.
        text: EcoString,
    },
    /// A list of plain strings.
    List {
        /// Whether `style` is `ordered`.
        ordered: bool,
        /// The items.
        items: Vec<EcoString>,
    },
    /// An image.
    Image {
        /// Source URL, if any.
        url: Option<EcoString>,
        /// Alternative text.
        alt: Option<EcoString>,
        /// Caption shown below the image.
        caption: Option<EcoString>,
    },
    /// A quotation.
    Quote {
        /// Plain text.
        text: EcoString,
        /// Optional attribution.
        attribution: Option<EcoString>,
    },
    /// A code listing.
    Code {
        /// The code.
        code: EcoString,
        /// Optional language name.
        language: Option<EcoString>,
    },
    /// Anything else, including non-object entries.
    Unknown,
}

impl LegacyBlock {
    /// Reads a block, never failing.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return LegacyBlock::Unknown;
        };
        let text = |field: &str| {
            object
                .get(field)
                .and_then(Value::as_str)
                .map(EcoString::from)
                .unwrap_or_default()
        };

        match object.get("type").and_then(Value::as_str) {
            Some("heading") => LegacyBlock::Heading {
                level: object.get("level").and_then(parse_level),
                text: text("text"),
            },
            Some("paragraph") => LegacyBlock::Paragraph { text: text("text") },
            Some("list") => LegacyBlock::List {
                ordered: object.get("style").and_then(Value::as_str) == Some("ordered"),
                items: object
                    .get("items")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(EcoString::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            Some("image") => LegacyBlock::Image {
                url: first_str(object, &["url", "src"]),
                alt: non_empty_str(object, "alt"),
                caption: non_empty_str(object, "caption"),
            },
            Some("quote") => LegacyBlock::Quote {
                text: text("text"),
                attribution: non_empty_str(object, "attribution"),
            },
            Some("code") => LegacyBlock::Code {
                code: text("code"),
                language: non_empty_str(object, "language"),
            },
            _ => LegacyBlock::Unknown,
        }
    }

    /// Reads a block array. Anything but an array yields no blocks.
    pub fn parse_blocks(value: &Value) -> Vec<LegacyBlock> {
        value
            .as_array()
            .map(|blocks| blocks.iter().map(LegacyBlock::from_value).collect())
            .unwrap_or_default()
    }
}

/// Accepts `2` as well as `"2"`.
fn parse_level(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
