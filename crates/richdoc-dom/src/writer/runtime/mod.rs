//! Runtime utilities shared between the writer and tree consumers.

pub mod diagnostics;
pub mod visitor;
