//! Node type definitions.
//!
//! The `NodeKind` enum is the closed set of node kinds a document tree can
//! hold. Each variant carries the kind-specific payload (element name and
//! attributes, comment text, instruction target, and so on). Navigation links
//! live in `NodeData`, not here.

use super::Attribute;
use crate::util::qname::QName;

/// The kind of an XML node and its associated data.
///
/// The kind of a node is fixed when it is created; only the payload can be
/// changed afterwards, through the population methods on
/// [`Document`](super::Document).
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The document root. Carries no markup of its own; its children are the
    /// top-level items of the document.
    Root,

    /// A markup declaration, e.g. `<!DOCTYPE html>`.
    Directive {
        /// Raw text between the delimiters (e.g. `"DOCTYPE html"`).
        content: String,
    },

    /// A processing instruction, e.g. `<?xml-stylesheet href="a.css"?>`.
    ProcessingInstruction {
        /// The instruction name (e.g. `"xml-stylesheet"`).
        target: String,
        /// The instruction body.
        data: String,
    },

    /// A comment, e.g. `<!-- note -->`.
    Comment {
        /// The comment text (without the `<!--` and `-->` delimiters).
        content: String,
    },

    /// An element, e.g. `<item id="7">hi</item>`.
    Element {
        /// The element's qualified name.
        name: QName,
        /// Attributes in document order.
        attributes: Vec<Attribute>,
        /// Text content, rendered after the element's children.
        value: String,
    },
}

impl NodeKind {
    /// Creates an element payload with no attributes and no text.
    #[must_use]
    pub fn element(name: QName) -> Self {
        Self::Element {
            name,
            attributes: Vec::new(),
            value: String::new(),
        }
    }

    /// Creates a comment payload.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment {
            content: content.into(),
        }
    }

    /// Creates a directive payload.
    #[must_use]
    pub fn directive(content: impl Into<String>) -> Self {
        Self::Directive {
            content: content.into(),
        }
    }

    /// Creates a processing instruction payload.
    #[must_use]
    pub fn processing_instruction(target: impl Into<String>, data: impl Into<String>) -> Self {
        Self::ProcessingInstruction {
            target: target.into(),
            data: data.into(),
        }
    }

    /// Returns the qualified name. Only elements have one.
    #[must_use]
    pub fn name(&self) -> Option<&QName> {
        match self {
            Self::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the text value of the node.
    ///
    /// For elements this is the trailing text, for comments and directives
    /// the raw text, and for processing instructions the body. The root has
    /// no value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Root => "",
            Self::Element { value, .. } => value,
            Self::Comment { content } | Self::Directive { content } => content,
            Self::ProcessingInstruction { data, .. } => data,
        }
    }

    pub(super) fn value_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Root => None,
            Self::Element { value, .. } => Some(value),
            Self::Comment { content } | Self::Directive { content } => Some(content),
            Self::ProcessingInstruction { data, .. } => Some(data),
        }
    }
}
