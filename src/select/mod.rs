//! Qualified-name search.
//!
//! Both lookups walk the subtree rooted at the starting node depth-first in
//! pre-order, testing the starting node itself first. A node matches when its
//! local name equals `local` and its namespace equals `namespace`, or
//! `namespace` is [`ANY_NAMESPACE`](crate::util::qname::ANY_NAMESPACE).
//! Only elements have names, so other kinds never match, though their
//! children are still searched.
//!
//! A matching node is never descended into: a same-named element nested
//! inside a match is shadowed by it and is unreachable from any ancestor of
//! that match. Search from the match's children to reach it.
//!
//! Searches never leave the starting node's subtree.

use crate::tree::{Document, NodeId};

impl Document {
    /// Returns the first node in the subtree of `from` that matches, in
    /// pre-order, `from` included.
    ///
    /// Unnamed nodes never match, so an empty `local` finds nothing the
    /// loader produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlx::Document;
    ///
    /// let doc = Document::parse_str("<a><foo><foo/></foo><foo/></a>").unwrap();
    /// let first = doc.select_node(doc.root(), "*", "foo").unwrap();
    /// assert_eq!(doc.parent(first), doc.root_element());
    /// ```
    #[must_use]
    pub fn select_node(&self, from: NodeId, namespace: &str, local: &str) -> Option<NodeId> {
        if self.is_match(from, namespace, local) {
            return Some(from);
        }
        self.children(from)
            .find_map(|child| self.select_node(child, namespace, local))
    }

    /// Returns every match in the subtree of `from`, in pre-order, without
    /// descending into matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlx::Document;
    ///
    /// let doc = Document::parse_str("<a><foo><foo/></foo><foo/></a>").unwrap();
    /// assert_eq!(doc.select_nodes(doc.root(), "*", "foo").len(), 2);
    /// ```
    #[must_use]
    pub fn select_nodes(&self, from: NodeId, namespace: &str, local: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_matches(from, namespace, local, &mut found);
        found
    }

    fn collect_matches(&self, id: NodeId, namespace: &str, local: &str, found: &mut Vec<NodeId>) {
        if self.is_match(id, namespace, local) {
            found.push(id);
            return;
        }
        for child in self.children(id) {
            self.collect_matches(child, namespace, local, found);
        }
    }

    fn is_match(&self, id: NodeId, namespace: &str, local: &str) -> bool {
        self.name(id).is_some_and(|name| name.matches(namespace, local))
    }
}
