//! XML serialization.
//!
//! This module renders a `Document` tree, or any subtree of it, back to XML
//! text. Values are written without escaping; see [`xml`] for the exact
//! output format.

pub mod xml;

pub use xml::{serialize, serialize_node, write_node, NodeDisplay};
