//! A display element tree and an HTML writer for it.
//!
//! The tree is produced by document renderers and consumed either directly by
//! a layout layer or serialized through [`HtmlWriter`].
//!
//! ```rust
//! use richdoc_dom::{Element, HtmlWriter, Node};
//!
//! let para = Element::new("p").with_children(vec![Node::text("Hello, world!")]);
//! let mut writer = HtmlWriter::new();
//! writer.write_node(&para.into()).unwrap();
//!
//! assert_eq!(writer.into_string().unwrap(), "<p>Hello, world!</p>\n");
//! ```

#![deny(missing_docs)]

pub use crate::ast::{Attribute, Element, Node};

pub use crate::writer::{
    walk_node, Diagnostic, DiagnosticSeverity, DiagnosticSink, HtmlWriteError, HtmlWriteResult,
    HtmlWriter, HtmlWriterOptions, NodeHandler, NullSink, SharedVecSink,
};

pub mod ast;
pub mod writer;
