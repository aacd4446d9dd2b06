//! # xmlx
//!
//! An in-memory XML node tree with qualified-name search, typed value
//! extraction and re-serialization.
//!
//! A [`Document`] owns an arena of nodes of five kinds (root, directive,
//! processing instruction, comment, element). Trees are loaded from text with
//! [`Document::parse_str`] or built by hand with the `create_*` methods and
//! [`Document::append_child`], queried with [`Document::select_node`] and the
//! typed accessors, and rendered back with [`serial::serialize`].
//!
//! ## Quick Start
//!
//! ```
//! use xmlx::Document;
//! use xmlx::serial::serialize_node;
//!
//! let doc = Document::parse_str(
//!     r#"<order id="17"><item sku="a1">3</item><item sku="b2">x</item></order>"#,
//! ).unwrap();
//! let order = doc.root_element().unwrap();
//!
//! assert_eq!(doc.attr_u32(order, "*", "id"), 17);
//! assert_eq!(doc.value_i32(order, "*", "item"), 3);
//!
//! let items = doc.select_nodes(order, "*", "item");
//! assert_eq!(doc.value_i32(items[1], "*", "item"), 0);
//! assert_eq!(serialize_node(&doc, items[0]), r#"<item sku="a1">3</item>"#);
//! ```
//!
//! ## Limitations
//!
//! Serialization writes text and attribute values verbatim, without escaping.

pub mod access;
pub mod decode;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod select;
pub mod serial;
pub mod tree;
pub mod util;

// Re-export primary types at the crate root for convenience.
pub use tree::{Attribute, Document, NodeId, NodeKind};
pub use util::qname::{QName, ANY_NAMESPACE};
