//! XML serializer.
//!
//! Renders a node and its subtree back to text. Rendering is recomputed from
//! the tree on every call. The output format per node kind:
//!
//! | kind                   | output                                   |
//! |------------------------|------------------------------------------|
//! | Root                   | children, concatenated                   |
//! | ProcessingInstruction  | `<?target data?>`                        |
//! | Comment                | `<!-- content -->`                       |
//! | Directive              | `<!content!>`                            |
//! | Element (empty)        | `<name attr="v" />`                      |
//! | Element                | `<name attr="v">children value</name>`   |
//!
//! Names are written as `namespace:local` when the namespace is non-empty.
//!
//! # Escaping
//!
//! Text and attribute values are written **verbatim**. A value containing
//! `<`, `>`, `&` or `"` produces output that is not well-formed XML. Callers
//! that store such characters must escape them before putting them in the
//! tree.

use std::fmt::{self, Write};

use crate::tree::{Document, NodeId, NodeKind};
use crate::util::qname::QName;

/// Serializes the whole document (the children of its Root) to a string.
///
/// # Examples
///
/// ```
/// use xmlx::Document;
/// use xmlx::serial::serialize;
///
/// let doc = Document::parse_str("<root><child>Hello</child><empty/></root>").unwrap();
/// assert_eq!(serialize(&doc), "<root><child>Hello</child><empty /></root>");
/// ```
#[must_use]
pub fn serialize(doc: &Document) -> String {
    serialize_node(doc, doc.root())
}

/// Serializes `id` and its subtree to a string.
#[must_use]
pub fn serialize_node(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(doc, id, &mut out);
    out
}

/// Writes `id` and its subtree into `out`.
///
/// # Errors
///
/// Returns an error only if `out` does.
pub fn write_node<W: Write + ?Sized>(doc: &Document, id: NodeId, out: &mut W) -> fmt::Result {
    match doc.kind(id) {
        NodeKind::Root => {
            for child in doc.children(id) {
                write_node(doc, child, out)?;
            }
            Ok(())
        }
        NodeKind::ProcessingInstruction { target, data } => write!(out, "<?{target} {data}?>"),
        NodeKind::Comment { content } => write!(out, "<!-- {content} -->"),
        NodeKind::Directive { content } => write!(out, "<!{content}!>"),
        NodeKind::Element {
            name,
            attributes,
            value,
        } => {
            out.write_char('<')?;
            write_name(out, name)?;
            for attr in attributes {
                out.write_char(' ')?;
                write_name(out, &attr.name)?;
                write!(out, "=\"{}\"", attr.value)?;
            }

            if doc.is_leaf(id) && value.is_empty() {
                return out.write_str(" />");
            }

            out.write_char('>')?;
            for child in doc.children(id) {
                write_node(doc, child, out)?;
            }
            out.write_str(value)?;
            out.write_str("</")?;
            write_name(out, name)?;
            out.write_char('>')
        }
    }
}

fn write_name<W: Write + ?Sized>(out: &mut W, name: &QName) -> fmt::Result {
    if name.has_space() {
        out.write_str(&name.space)?;
        out.write_char(':')?;
    }
    out.write_str(&name.local)
}

/// A `Display` adapter rendering a node, created by [`Document::display`].
#[derive(Debug, Clone, Copy)]
pub struct NodeDisplay<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self.doc, self.id, f)
    }
}

impl Document {
    /// Returns a `Display` adapter that renders `id` and its subtree.
    ///
    /// ```
    /// use xmlx::Document;
    ///
    /// let doc = Document::parse_str("<a><b>1</b></a>").unwrap();
    /// let b = doc.select_node(doc.root(), "*", "b").unwrap();
    /// assert_eq!(format!("{}", doc.display(b)), "<b>1</b>");
    /// ```
    #[must_use]
    pub fn display(&self, id: NodeId) -> NodeDisplay<'_> {
        NodeDisplay { doc: self, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Attribute;

    fn element(doc: &mut Document, space: &str, local: &str) -> NodeId {
        doc.create_element(QName::new(space, local))
    }

    #[test]
    fn test_element_with_attribute_and_value() {
        let mut doc = Document::new();
        let item = element(&mut doc, "", "item");
        doc.push_attribute(item, Attribute::new(QName::local("id"), "7"));
        doc.set_value(item, "hi");
        assert_eq!(serialize_node(&doc, item), r#"<item id="7">hi</item>"#);
    }

    #[test]
    fn test_empty_element() {
        let mut doc = Document::new();
        let name = element(&mut doc, "", "name");
        assert_eq!(serialize_node(&doc, name), "<name />");
    }

    #[test]
    fn test_empty_element_with_attributes() {
        let mut doc = Document::new();
        let img = element(&mut doc, "", "img");
        doc.push_attribute(img, Attribute::new(QName::local("src"), "a.png"));
        doc.push_attribute(img, Attribute::new(QName::local("alt"), ""));
        assert_eq!(serialize_node(&doc, img), r#"<img src="a.png" alt="" />"#);
    }

    #[test]
    fn test_namespaced_names() {
        let mut doc = Document::new();
        let rect = element(&mut doc, "svg", "rect");
        doc.push_attribute(rect, Attribute::new(QName::new("xlink", "href"), "#a"));
        doc.set_value(rect, "t");
        assert_eq!(
            serialize_node(&doc, rect),
            r##"<svg:rect xlink:href="#a">t</svg:rect>"##
        );
    }

    #[test]
    fn test_value_follows_children() {
        let mut doc = Document::new();
        let p = element(&mut doc, "", "p");
        let b = element(&mut doc, "", "b");
        doc.set_value(b, "bold");
        doc.set_value(p, "tail");
        doc.append_child(p, b);
        assert_eq!(serialize_node(&doc, p), "<p><b>bold</b>tail</p>");
    }

    #[test]
    fn test_element_with_only_children() {
        let mut doc = Document::new();
        let list = element(&mut doc, "", "list");
        let a = element(&mut doc, "", "a");
        let b = element(&mut doc, "", "b");
        doc.append_child(list, a);
        doc.append_child(list, b);
        assert_eq!(serialize_node(&doc, list), "<list><a /><b /></list>");
    }

    #[test]
    fn test_other_kinds() {
        let mut doc = Document::new();
        let pi = doc.create_processing_instruction("xml-stylesheet", "href=\"a.css\"");
        let comment = doc.create_comment("note");
        let directive = doc.create_directive("DOCTYPE html");

        assert_eq!(serialize_node(&doc, pi), r#"<?xml-stylesheet href="a.css"?>"#);
        assert_eq!(serialize_node(&doc, comment), "<!-- note -->");
        assert_eq!(serialize_node(&doc, directive), "<!DOCTYPE html!>");
    }

    #[test]
    fn test_root_concatenates_children() {
        let mut doc = Document::new();
        let root = doc.root();
        let pi = doc.create_processing_instruction("xml", "version=\"1.0\"");
        let top = element(&mut doc, "", "top");
        doc.append_child(root, pi);
        doc.append_child(root, top);
        assert_eq!(serialize(&doc), r#"<?xml version="1.0"?><top />"#);
    }

    #[test]
    fn test_empty_root_renders_nothing() {
        assert_eq!(serialize(&Document::new()), "");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut doc = Document::new();
        let e = element(&mut doc, "", "e");
        doc.push_attribute(e, Attribute::new(QName::local("q"), r#"a"b"#));
        doc.set_value(e, "1 < 2 & 3 > 2");
        assert_eq!(serialize_node(&doc, e), r#"<e q="a"b">1 < 2 & 3 > 2</e>"#);
    }

    #[test]
    fn test_rendering_tracks_mutation() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = element(&mut doc, "", "a");
        let b = element(&mut doc, "", "b");
        doc.append_child(root, a);
        doc.append_child(a, b);
        assert_eq!(serialize(&doc), "<a><b /></a>");

        doc.remove_child(a, b);
        assert_eq!(serialize(&doc), "<a />");
    }

    #[test]
    fn test_display_matches_serialize_node() {
        let mut doc = Document::new();
        let e = element(&mut doc, "", "e");
        doc.set_value(e, "v");
        assert_eq!(doc.display(e).to_string(), serialize_node(&doc, e));
    }
}
