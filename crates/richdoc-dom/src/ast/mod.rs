//! Display element tree.
//!
//! This module defines the nodes a renderer emits: elements with a tag, an
//! optional stable key, attributes and children, and escaped text leaves.

mod element;
mod node;

pub use self::element::{Attribute, Element};
pub use self::node::Node;
