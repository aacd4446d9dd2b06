//! Arena-based XML document tree.
//!
//! All nodes live in a contiguous `Vec<NodeData>` owned by the `Document` and
//! are referenced by `NodeId`, a newtype over `NonZeroU32`. Navigation links
//! (parent, first\_child, last\_child, next\_sibling, prev\_sibling) are arena
//! indices too, so the parent link is a plain back-reference and never a
//! source of ownership cycles.
//!
//! Detached nodes stay allocated in the arena until the `Document` is dropped.
//! They keep their own children, so a removed subtree can be re-attached
//! elsewhere unchanged.

mod node;

pub use node::NodeKind;

use std::num::NonZeroU32;
use std::path::Path;

use tracing::{trace, warn};

use crate::error::{LoadError, ParseError};
use crate::parser::ParseOptions;
use crate::util::qname::QName;

/// A typed index into the document's node arena.
///
/// `NodeId` is a newtype over `NonZeroU32`, meaning it can never be zero
/// and `Option<NodeId>` has the same size as `NodeId` (niche optimization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0.
    #[allow(clippy::expect_used, clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        Self(NonZeroU32::new(index as u32).expect("NodeId index must be non-zero"))
    }

    /// Returns the raw index as a `usize` for indexing into the arena.
    fn as_index(self) -> usize {
        self.0.get() as usize
    }
}

/// Storage for a single node in the document arena.
///
/// Each node stores its kind and payload plus links to parent, children, and
/// siblings. Access individual nodes via [`Document::node`].
#[derive(Debug, Clone)]
pub struct NodeData {
    /// What kind of node this is and its payload.
    pub kind: NodeKind,
    /// Parent node, if any. Roots and detached nodes have none.
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node (for O(1) append).
    pub last_child: Option<NodeId>,
    /// Next sibling.
    pub next_sibling: Option<NodeId>,
    /// Previous sibling.
    pub prev_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// An XML attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute's qualified name.
    pub name: QName,
    /// The attribute value, stored and rendered verbatim.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute.
    #[must_use]
    pub fn new(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// An XML document.
///
/// The `Document` owns all nodes in an arena and provides methods for
/// tree navigation and mutation. All tree operations go through
/// `&Document` (navigation) or `&mut Document` (mutation).
///
/// # Examples
///
/// ```
/// use xmlx::Document;
///
/// let doc = Document::parse_str("<root><child>Hello</child></root>").unwrap();
/// let root = doc.root_element().unwrap();
/// assert_eq!(doc.name(root).map(|n| n.local.as_str()), Some("root"));
/// assert_eq!(doc.value_str(doc.root(), "*", "child"), "Hello");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    /// The node arena. Index 0 is unused (placeholder for `NonZeroU32`).
    nodes: Vec<NodeData>,
    /// The Root node id.
    root: NodeId,
}

impl Document {
    /// Creates a new empty document holding a single Root node.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        // Index 0: placeholder (NodeId uses NonZeroU32)
        nodes.push(NodeData::new(NodeKind::Root));
        nodes.push(NodeData::new(NodeKind::Root));
        Self {
            nodes,
            root: NodeId::from_index(1),
        }
    }

    /// Parses an XML string into a `Document` with default options.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is not well-formed XML.
    pub fn parse_str(input: &str) -> Result<Self, ParseError> {
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        crate::parser::parse_str(input)
    }

    /// Parses XML from raw bytes, detecting the encoding first.
    ///
    /// See [`crate::encoding::decode_to_utf8`] for the detection rules.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the bytes cannot be decoded or the resulting
    /// text is not well-formed XML.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlx::Document;
    ///
    /// let doc = Document::parse_bytes(b"\xEF\xBB\xBF<root/>").unwrap();
    /// assert!(doc.root_element().is_some());
    /// ```
    pub fn parse_bytes(input: &[u8]) -> Result<Self, ParseError> {
        Self::parse_bytes_with_options(input, &ParseOptions::default())
    }

    /// Like [`Document::parse_bytes`], with explicit loader options.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the bytes cannot be decoded or the resulting
    /// text is not well-formed XML.
    pub fn parse_bytes_with_options(
        input: &[u8],
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        let text = crate::encoding::decode_to_utf8(input)?;
        crate::parser::parse_str_with_options(&text, options)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read and
    /// `LoadError::Parse` if its content cannot be parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_file_with_options(path, &ParseOptions::default())
    }

    /// Like [`Document::load_file`], with explicit loader options.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read and
    /// `LoadError::Parse` if its content cannot be parsed.
    pub fn load_file_with_options(
        path: impl AsRef<Path>,
        options: &ParseOptions,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse_bytes_with_options(&bytes, options)?)
    }

    /// Returns the Root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the first top-level element of the document.
    #[must_use]
    pub fn root_element(&self) -> Option<NodeId> {
        self.children(self.root)
            .find(|&id| matches!(self.node(id).kind, NodeKind::Element { .. }))
    }

    /// Returns a reference to the `NodeData` for the given node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a node of this document.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.as_index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.as_index()]
    }

    /// Returns the kind and payload of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    /// Returns the qualified name of an element; `None` for other kinds.
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&QName> {
        self.node(id).kind.name()
    }

    /// Returns the raw text value of a node (see [`NodeKind::value`]).
    #[must_use]
    pub fn value(&self, id: NodeId) -> &str {
        self.node(id).kind.value()
    }

    /// Returns the target of a processing instruction.
    #[must_use]
    pub fn target(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::ProcessingInstruction { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Returns the attributes of an element node.
    ///
    /// Returns an empty slice for non-element nodes.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match &self.node(id).kind {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    // --- Navigation ---

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Returns the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    /// Returns the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Returns the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// Returns an iterator over the children of a node, in document order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            next: self.node(id).first_child,
        }
    }

    /// Returns an iterator over a node and its ancestors (walking up to root).
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: Some(id),
        }
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).first_child.is_none()
    }

    // --- Construction and population ---

    /// Allocates a new, unattached node in the arena and returns its `NodeId`.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(NodeData::new(kind));
        NodeId::from_index(index)
    }

    /// Allocates an empty element.
    pub fn create_element(&mut self, name: QName) -> NodeId {
        self.create_node(NodeKind::element(name))
    }

    /// Allocates a comment.
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::comment(content))
    }

    /// Allocates a directive.
    pub fn create_directive(&mut self, content: impl Into<String>) -> NodeId {
        self.create_node(NodeKind::directive(content))
    }

    /// Allocates a processing instruction.
    pub fn create_processing_instruction(
        &mut self,
        target: impl Into<String>,
        data: impl Into<String>,
    ) -> NodeId {
        self.create_node(NodeKind::processing_instruction(target, data))
    }

    /// Replaces the text value of a node. Ignored for the Root kind.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(slot) = self.node_mut(id).kind.value_mut() {
            *slot = value.into();
        }
    }

    /// Appends to the text value of a node. Ignored for the Root kind.
    pub fn append_value(&mut self, id: NodeId, text: &str) {
        if let Some(slot) = self.node_mut(id).kind.value_mut() {
            slot.push_str(text);
        }
    }

    /// Sets the target of a processing instruction. Ignored for other kinds.
    pub fn set_target(&mut self, id: NodeId, new_target: impl Into<String>) {
        if let NodeKind::ProcessingInstruction { target, .. } = &mut self.node_mut(id).kind {
            *target = new_target.into();
        }
    }

    /// Appends an attribute to an element. Ignored for other kinds.
    pub fn push_attribute(&mut self, id: NodeId, attribute: Attribute) {
        if let NodeKind::Element { attributes, .. } = &mut self.node_mut(id).kind {
            attributes.push(attribute);
        }
    }

    // --- Mutation ---

    /// Appends `child` to the end of `parent`'s child list.
    ///
    /// If `child` is already attached somewhere, it is first removed from its
    /// current parent, so a node is never listed under two parents. Requests
    /// that would make a node its own ancestor are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlx::Document;
    /// use xmlx::util::qname::QName;
    ///
    /// let mut doc = Document::new();
    /// let a = doc.create_element(QName::local("a"));
    /// let b = doc.create_element(QName::local("b"));
    /// let c = doc.create_element(QName::local("c"));
    /// doc.append_child(a, c);
    /// doc.append_child(b, c);
    /// assert!(doc.is_leaf(a));
    /// assert_eq!(doc.parent(c), Some(b));
    /// ```
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.ancestors(parent).any(|id| id == child) {
            warn!(?parent, ?child, "refusing to attach a node beneath itself");
            return;
        }

        if let Some(previous) = self.node(child).parent {
            trace!(?child, from = ?previous, to = ?parent, "reparenting node");
            self.detach(child);
        }

        self.node_mut(child).parent = Some(parent);

        if let Some(last) = self.node(parent).last_child {
            self.node_mut(last).next_sibling = Some(child);
            self.node_mut(child).prev_sibling = Some(last);
            self.node_mut(parent).last_child = Some(child);
        } else {
            self.node_mut(parent).first_child = Some(child);
            self.node_mut(parent).last_child = Some(child);
        }
    }

    /// Removes `child` from `parent`'s child list.
    ///
    /// Does nothing if `child` is not currently a child of `parent`. Later
    /// siblings keep their relative order. The removed subtree keeps its own
    /// children.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(child).parent != Some(parent) {
            trace!(?parent, ?child, "remove_child: not a child, ignoring");
            return;
        }
        self.detach(child);
    }

    /// Detaches a node from whatever parent it has.
    ///
    /// The node remains allocated in the arena and can be attached again.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };

        let prev = self.node(id).prev_sibling;
        let next = self.node(id).next_sibling;

        match prev {
            Some(p) => self.node_mut(p).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }

        match next {
            Some(n) => self.node_mut(n).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }

        self.node_mut(id).parent = None;
        self.node_mut(id).prev_sibling = None;
        self.node_mut(id).next_sibling = None;
    }

    /// Returns the total number of nodes in the arena, attached or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1 // subtract placeholder at index 0
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// --- Iterators ---

/// Iterator over the children of a node.
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.node(current).next_sibling;
        Some(current)
    }
}

/// Iterator over a node and its ancestors.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.node(current).parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(doc: &mut Document, local: &str) -> NodeId {
        doc.create_element(QName::local(local))
    }

    fn children_of(doc: &Document, id: NodeId) -> Vec<NodeId> {
        doc.children(id).collect()
    }

    #[test]
    fn test_new_document_has_root() {
        let doc = Document::new();
        assert!(matches!(doc.kind(doc.root()), NodeKind::Root));
        assert_eq!(doc.parent(doc.root()), None);
        assert_eq!(doc.node_count(), 1);
    }

    #[test]
    fn test_create_and_append_element() {
        let mut doc = Document::new();
        let root = doc.root();
        let elem = element(&mut doc, "div");
        doc.append_child(root, elem);

        assert_eq!(doc.first_child(root), Some(elem));
        assert_eq!(doc.last_child(root), Some(elem));
        assert_eq!(doc.parent(elem), Some(root));
        assert_eq!(doc.name(elem), Some(&QName::local("div")));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = element(&mut doc, "a");
        let b = doc.create_comment("b");
        let c = element(&mut doc, "c");

        doc.append_child(root, a);
        doc.append_child(root, b);
        doc.append_child(root, c);

        assert_eq!(children_of(&doc, root), vec![a, b, c]);
        assert_eq!(doc.next_sibling(a), Some(b));
        assert_eq!(doc.prev_sibling(c), Some(b));
        assert_eq!(doc.prev_sibling(a), None);
        assert_eq!(doc.next_sibling(c), None);
    }

    #[test]
    fn test_reparent_moves_node() {
        let mut doc = Document::new();
        let p1 = element(&mut doc, "p1");
        let p2 = element(&mut doc, "p2");
        let a = element(&mut doc, "a");
        let b = element(&mut doc, "b");
        let c = element(&mut doc, "c");
        let z = element(&mut doc, "z");
        doc.append_child(p1, a);
        doc.append_child(p1, b);
        doc.append_child(p1, c);
        doc.append_child(p2, z);

        doc.append_child(p2, b);

        assert_eq!(children_of(&doc, p1), vec![a, c]);
        assert_eq!(children_of(&doc, p2), vec![z, b]);
        assert_eq!(doc.parent(b), Some(p2));
        assert_eq!(doc.next_sibling(a), Some(c));
        assert_eq!(doc.prev_sibling(b), Some(z));
    }

    #[test]
    fn test_reappend_to_same_parent_moves_to_end() {
        let mut doc = Document::new();
        let p = element(&mut doc, "p");
        let a = element(&mut doc, "a");
        let b = element(&mut doc, "b");
        doc.append_child(p, a);
        doc.append_child(p, b);

        doc.append_child(p, a);

        assert_eq!(children_of(&doc, p), vec![b, a]);
        assert_eq!(doc.parent(a), Some(p));
    }

    #[test]
    fn test_append_self_is_ignored() {
        let mut doc = Document::new();
        let a = element(&mut doc, "a");
        doc.append_child(a, a);
        assert!(doc.is_leaf(a));
        assert_eq!(doc.parent(a), None);
    }

    #[test]
    fn test_append_ancestor_under_descendant_is_ignored() {
        let mut doc = Document::new();
        let root = doc.root();
        let outer = element(&mut doc, "outer");
        let inner = element(&mut doc, "inner");
        doc.append_child(root, outer);
        doc.append_child(outer, inner);

        doc.append_child(inner, outer);

        assert_eq!(doc.parent(outer), Some(root));
        assert_eq!(doc.parent(inner), Some(outer));
        assert!(doc.is_leaf(inner));
    }

    #[test]
    fn test_remove_child_middle() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = element(&mut doc, "a");
        let b = element(&mut doc, "b");
        let c = element(&mut doc, "c");
        doc.append_child(root, a);
        doc.append_child(root, b);
        doc.append_child(root, c);

        doc.remove_child(root, b);

        assert_eq!(children_of(&doc, root), vec![a, c]);
        assert_eq!(doc.parent(b), None);
        assert_eq!(doc.next_sibling(a), Some(c));
        assert_eq!(doc.prev_sibling(c), Some(a));
        assert_eq!(doc.next_sibling(b), None);
        assert_eq!(doc.prev_sibling(b), None);
    }

    #[test]
    fn test_remove_child_first_and_last() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = element(&mut doc, "a");
        let b = element(&mut doc, "b");
        let c = element(&mut doc, "c");
        doc.append_child(root, a);
        doc.append_child(root, b);
        doc.append_child(root, c);

        doc.remove_child(root, a);
        assert_eq!(doc.first_child(root), Some(b));
        assert_eq!(doc.prev_sibling(b), None);

        doc.remove_child(root, c);
        assert_eq!(doc.last_child(root), Some(b));
        assert_eq!(doc.next_sibling(b), None);
    }

    #[test]
    fn test_remove_only_child() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = element(&mut doc, "a");
        doc.append_child(root, a);
        doc.remove_child(root, a);

        assert_eq!(doc.first_child(root), None);
        assert_eq!(doc.last_child(root), None);
    }

    #[test]
    fn test_remove_non_child_is_noop() {
        let mut doc = Document::new();
        let root = doc.root();
        let other = element(&mut doc, "other");
        let a = element(&mut doc, "a");
        let b = element(&mut doc, "b");
        doc.append_child(root, a);
        doc.append_child(other, b);

        doc.remove_child(root, b);

        assert_eq!(children_of(&doc, root), vec![a]);
        assert_eq!(children_of(&doc, other), vec![b]);
        assert_eq!(doc.parent(b), Some(other));
    }

    #[test]
    fn test_remove_unattached_is_noop() {
        let mut doc = Document::new();
        let root = doc.root();
        let loose = element(&mut doc, "loose");
        doc.remove_child(root, loose);
        assert_eq!(doc.parent(loose), None);
        assert!(doc.is_leaf(root));
    }

    #[test]
    fn test_removed_subtree_stays_intact() {
        let mut doc = Document::new();
        let root = doc.root();
        let branch = element(&mut doc, "branch");
        let leaf1 = element(&mut doc, "leaf1");
        let leaf2 = element(&mut doc, "leaf2");
        doc.append_child(root, branch);
        doc.append_child(branch, leaf1);
        doc.append_child(branch, leaf2);

        doc.remove_child(root, branch);

        assert_eq!(doc.parent(branch), None);
        assert_eq!(children_of(&doc, branch), vec![leaf1, leaf2]);
        assert_eq!(doc.parent(leaf1), Some(branch));
    }

    #[test]
    fn test_ancestors_iterator() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = element(&mut doc, "a");
        let b = element(&mut doc, "b");
        doc.append_child(root, a);
        doc.append_child(a, b);

        let chain: Vec<NodeId> = doc.ancestors(b).collect();
        assert_eq!(chain, vec![b, a, root]);
    }

    #[test]
    fn test_root_element_skips_non_elements() {
        let mut doc = Document::new();
        let root = doc.root();
        let pi = doc.create_processing_instruction("xml", "version=\"1.0\"");
        let comment = doc.create_comment("c");
        let elem = element(&mut doc, "doc");
        doc.append_child(root, pi);
        doc.append_child(root, comment);
        doc.append_child(root, elem);

        assert_eq!(doc.root_element(), Some(elem));
    }

    #[test]
    fn test_population_methods() {
        let mut doc = Document::new();
        let elem = element(&mut doc, "item");
        doc.push_attribute(elem, Attribute::new(QName::local("id"), "7"));
        doc.set_value(elem, "h");
        doc.append_value(elem, "i");

        assert_eq!(doc.value(elem), "hi");
        assert_eq!(doc.attributes(elem).len(), 1);
        assert_eq!(doc.attributes(elem)[0].value, "7");

        let pi = doc.create_processing_instruction("a", "b");
        doc.set_target(pi, "target");
        assert_eq!(doc.target(pi), Some("target"));
        assert_eq!(doc.target(elem), None);
    }

    #[test]
    fn test_population_ignores_wrong_kind() {
        let mut doc = Document::new();
        let root = doc.root();
        let comment = doc.create_comment("note");
        doc.set_value(root, "ignored");
        doc.push_attribute(comment, Attribute::new(QName::local("x"), "1"));

        assert_eq!(doc.value(root), "");
        assert!(doc.attributes(comment).is_empty());
    }

    #[test]
    fn test_parse_bytes_with_options() {
        let opts = ParseOptions::default().keep_comments(false);
        let doc = Document::parse_bytes_with_options(b"<a><!--x--><b/></a>", &opts);
        let doc = doc.unwrap_or_default();
        let a = doc.root_element();
        assert!(a.is_some_and(|a| doc.children(a).count() == 1));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err =
            Document::load_file_with_options("/nonexistent/xmlx.xml", &ParseOptions::default());
        assert!(matches!(err, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_node_count_counts_detached_nodes() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = element(&mut doc, "a");
        doc.append_child(root, a);
        doc.remove_child(root, a);
        assert_eq!(doc.node_count(), 2);
    }
}
