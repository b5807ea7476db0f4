//! Inline formatting flags of text nodes.

use std::fmt;

use serde_json::Value;

/// The bitmask stored in the `format` field of a text node.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextFormat(u32);

impl TextFormat {
    /// No formatting.
    pub const PLAIN: Self = Self(0);
    /// `<strong>`
    pub const BOLD: Self = Self(1);
    /// `<em>`
    pub const ITALIC: Self = Self(1 << 1);
    /// `<u>`
    pub const UNDERLINE: Self = Self(1 << 2);
    /// `<s>`
    pub const STRIKETHROUGH: Self = Self(1 << 3);
    /// `<code>`
    pub const CODE: Self = Self(1 << 4);
    /// `<sub>`
    pub const SUBSCRIPT: Self = Self(1 << 5);
    /// `<sup>`
    pub const SUPERSCRIPT: Self = Self(1 << 6);

    /// Wrapping order, innermost first.
    ///
    /// `format: 3` must give `<strong><em>warn</em></strong>`, so `em` sits
    /// inside `strong`.
    const NESTING: [(Self, &'static str); 7] = [
        (Self::CODE, "code"),
        (Self::ITALIC, "em"),
        (Self::BOLD, "strong"),
        (Self::UNDERLINE, "u"),
        (Self::STRIKETHROUGH, "s"),
        (Self::SUBSCRIPT, "sub"),
        (Self::SUPERSCRIPT, "sup"),
    ];

    /// Creates a format from raw bits. Unknown bits are kept but ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reads the `format` field. Anything but a non-negative integer is plain.
    pub fn from_value(value: Option<&Value>) -> Self {
        value
            .and_then(Value::as_u64)
            .and_then(|bits| u32::try_from(bits).ok())
            .map(Self)
            .unwrap_or_default()
    }

    /// Whether every flag of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no known flag is set.
    pub fn is_plain(self) -> bool {
        self.wrappers().next().is_none()
    }

    /// The tags wrapping formatted text, innermost first.
    pub fn wrappers(self) -> impl Iterator<Item = &'static str> {
        Self::NESTING
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, tag)| tag)
    }
}

impl std::ops::BitOr for TextFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            return f.write_str("TextFormat(plain)");
        }
        f.write_str("TextFormat(")?;
        for (i, tag) in self.wrappers().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(tag)?;
        }
        f.write_str(")")
    }
}
