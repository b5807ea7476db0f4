use std::fmt::{self, Display};

/// Errors that can occur during HTML writing from display nodes.
#[derive(Debug)]
pub enum HtmlWriteError {
    /// Invalid structure encountered, e.g. an attribute written outside a tag.
    InvalidStructure(String),
    /// An invalid HTML tag name was encountered.
    InvalidHtmlTag(String),
    /// An invalid HTML attribute name was encountered.
    InvalidHtmlAttribute(String),
}

impl Display for HtmlWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlWriteError::InvalidStructure(msg) => {
                write!(f, "Invalid structure for HTML conversion: {msg}")
            }
            HtmlWriteError::InvalidHtmlTag(tag_name) => {
                write!(f, "Invalid HTML tag name: {tag_name}")
            }
            HtmlWriteError::InvalidHtmlAttribute(attr_name) => {
                write!(f, "Invalid HTML attribute name: {attr_name}")
            }
        }
    }
}

impl std::error::Error for HtmlWriteError {}

/// Result type alias for HTML writer operations.
pub type HtmlWriteResult<T> = Result<T, HtmlWriteError>;
