//! Writers for the display tree.
//!
//! This module provides functionality to serialize display nodes to HTML.

pub mod runtime;

/// HTML specific modules are grouped under writer::html
pub mod html;
pub use self::html::{HtmlWriteError, HtmlWriteResult, HtmlWriter, HtmlWriterOptions};

pub use self::runtime::diagnostics::{
    Diagnostic, DiagnosticSeverity, DiagnosticSink, NullSink, SharedVecSink,
};
pub use self::runtime::visitor::{walk_node, NodeHandler};
