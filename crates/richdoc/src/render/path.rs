use ecow::{eco_format, EcoString};

/// Position of a node in its input tree, used as the element key.
///
/// Keys follow positions rather than content since content may repeat:
/// `"2"` is the third top-level node and `"2-0"` its first child. Elements
/// synthesized for a node get a named part, e.g. `"2-0:img"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodePath(EcoString);

impl NodePath {
    pub(crate) fn root(index: usize) -> Self {
        Self(eco_format!("{index}"))
    }

    pub(crate) fn child(&self, index: usize) -> Self {
        Self(eco_format!("{}-{index}", self.0))
    }

    pub(crate) fn key(&self) -> EcoString {
        self.0.clone()
    }

    pub(crate) fn part(&self, name: &str) -> EcoString {
        eco_format!("{}:{name}", self.0)
    }
}
