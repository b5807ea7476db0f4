//! Diagnostics support for renderers and writers.
//!
//! Rendering degrades silently on malformed input. The traits here let a
//! caller observe what was skipped without the renderer depending on a
//! logger being installed.

use std::cell::RefCell;
use std::rc::Rc;

use ecow::EcoString;

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Recoverable issues that dropped or textualized part of the output.
    Warning,
    /// Informational notes for downstream consumers.
    Info,
}

/// Diagnostic message emitted during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the diagnostic.
    pub severity: DiagnosticSeverity,
    /// Human-readable message.
    pub message: EcoString,
    /// Position key of the node the diagnostic refers to, if known.
    pub key: Option<EcoString>,
}

impl Diagnostic {
    /// Convenience constructor for warnings.
    pub fn warning<S: Into<EcoString>>(message: S) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            key: None,
        }
    }

    /// Convenience constructor for informational diagnostics.
    pub fn info<S: Into<EcoString>>(message: S) -> Self {
        Self {
            severity: DiagnosticSeverity::Info,
            message: message.into(),
            key: None,
        }
    }

    /// Attach the position key of the offending node.
    pub fn at(mut self, key: impl Into<EcoString>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Trait used by renderers and writers to report non-fatal diagnostics.
pub trait DiagnosticSink {
    /// Emit a diagnostic message.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// A no-op sink used as default when the caller does not provide a collector.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _: Diagnostic) {}
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Shared sink that stores diagnostics in an `Rc<RefCell<Vec<Diagnostic>>>` for later inspection.
#[derive(Debug, Clone, Default)]
pub struct SharedVecSink {
    target: Rc<RefCell<Vec<Diagnostic>>>,
}

impl SharedVecSink {
    /// Take every diagnostic collected so far.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.target.borrow_mut())
    }
}

impl DiagnosticSink for SharedVecSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.target.borrow_mut().push(diagnostic);
    }
}
