//! Event-driven tree builder on top of `quick-xml`.

use std::borrow::Cow;
use std::fmt::{Display, Write as _};

use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, trace};

use super::ParseOptions;
use crate::error::ParseError;
use crate::tree::{Attribute, Document, NodeId};
use crate::util::qname::QName;

pub(super) struct TreeBuilder<'o> {
    doc: Document,
    /// Open elements, innermost last.
    open: Vec<NodeId>,
    options: &'o ParseOptions,
}

impl<'o> TreeBuilder<'o> {
    pub(super) fn new(options: &'o ParseOptions) -> Self {
        Self {
            doc: Document::new(),
            open: Vec::new(),
            options,
        }
    }

    pub(super) fn build(mut self, input: &str) -> Result<Document, ParseError> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(self.options.trim_text);

        loop {
            let position = reader.buffer_position();
            let event = reader.read_event().map_err(|e| {
                ParseError::new(e.to_string(), reader.error_position())
            })?;

            match event {
                Event::Start(start) => {
                    self.check_depth(position)?;
                    let id = self.element(&start, position)?;
                    self.attach(id);
                    self.open.push(id);
                }
                Event::Empty(start) => {
                    self.check_depth(position)?;
                    let id = self.element(&start, position)?;
                    self.attach(id);
                }
                Event::End(_) => {
                    if self.open.pop().is_none() {
                        return Err(ParseError::new("unexpected closing tag", position));
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| ParseError::new(e.to_string(), position))?;
                    self.text(&text);
                }
                Event::CData(cdata) => {
                    let raw = utf8(&cdata, position)?;
                    self.text(raw);
                }
                Event::Comment(comment) => {
                    if self.options.keep_comments {
                        let content = self.trimmed(utf8(&comment, position)?);
                        let id = self.doc.create_comment(content);
                        self.attach(id);
                    }
                }
                Event::DocType(doctype) => {
                    let content = utf8(&doctype, position)?.trim();
                    let id = self.doc.create_directive(format!("DOCTYPE {content}"));
                    self.attach(id);
                }
                Event::Decl(decl) => {
                    if self.options.keep_declaration {
                        let data = declaration_body(&decl, position)?;
                        let id = self.doc.create_processing_instruction("xml", data);
                        self.attach(id);
                    }
                }
                Event::PI(pi) => {
                    let target = utf8(pi.target(), position)?;
                    let data = utf8(pi.content(), position)?.trim_start();
                    let id = self.doc.create_processing_instruction(target, data);
                    self.attach(id);
                }
                Event::Eof => break,
            }
        }

        if let Some(&unclosed) = self.open.last() {
            let name = self.doc.name(unclosed).map(ToString::to_string);
            return Err(ParseError::new(
                format!("unclosed element <{}>", name.unwrap_or_default()),
                reader.buffer_position(),
            ));
        }

        debug!(
            nodes = self.doc.node_count(),
            bytes = input.len(),
            "document loaded"
        );
        Ok(self.doc)
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or_else(|| self.doc.root())
    }

    fn attach(&mut self, id: NodeId) {
        let parent = self.current();
        self.doc.append_child(parent, id);
    }

    fn check_depth(&self, position: u64) -> Result<(), ParseError> {
        if self.open.len() >= self.options.max_depth as usize {
            return Err(ParseError::new(
                format!("maximum nesting depth of {} exceeded", self.options.max_depth),
                position,
            ));
        }
        Ok(())
    }

    fn element(&mut self, start: &BytesStart<'_>, position: u64) -> Result<NodeId, ParseError> {
        let name = QName::parse(utf8(start.name().as_ref(), position)?);
        let id = self.doc.create_element(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| ParseError::new(e.to_string(), position))?;
            let key = QName::parse(utf8(attr.key.as_ref(), position)?);
            let value = attr
                .unescape_value()
                .map_err(|e| ParseError::new(e.to_string(), position))?;
            self.doc.push_attribute(id, Attribute::new(key, value));
        }
        Ok(id)
    }

    fn text(&mut self, text: &str) {
        if self.open.is_empty() {
            trace!(len = text.len(), "dropping text outside the document element");
            return;
        }
        let current = self.current();
        self.doc.append_value(current, text);
    }

    fn trimmed<'t>(&self, text: &'t str) -> &'t str {
        if self.options.trim_text {
            text.trim()
        } else {
            text
        }
    }
}

fn utf8(bytes: &[u8], position: u64) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|e| ParseError::new(e.to_string(), position))
}

/// Rebuilds the pseudo-attributes of an XML declaration as instruction data.
fn declaration_body(decl: &BytesDecl<'_>, position: u64) -> Result<String, ParseError> {
    let mut body = format!("version=\"{}\"", lossy(decl.version(), position)?);
    if let Some(encoding) = decl.encoding() {
        let _ = write!(body, " encoding=\"{}\"", lossy(encoding, position)?);
    }
    if let Some(standalone) = decl.standalone() {
        let _ = write!(body, " standalone=\"{}\"", lossy(standalone, position)?);
    }
    Ok(body)
}

fn lossy<E: Display>(value: Result<Cow<'_, [u8]>, E>, position: u64) -> Result<String, ParseError> {
    value
        .map(|v| String::from_utf8_lossy(&v).into_owned())
        .map_err(|e| ParseError::new(e.to_string(), position))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::{parse_str, parse_str_with_options, ParseOptions};
    use crate::tree::NodeKind;
    use crate::util::qname::QName;

    #[test]
    fn test_parse_simple_element() {
        let doc = parse_str("<root/>").unwrap();
        let root = doc.root_element().unwrap();
        assert_eq!(doc.name(root), Some(&QName::local("root")));
        assert_eq!(doc.parent(root), Some(doc.root()));
    }

    #[test]
    fn test_parse_prefixed_names() {
        let doc = parse_str(r#"<svg:rect xlink:href="a" width="2"/>"#).unwrap();
        let rect = doc.root_element().unwrap();
        assert_eq!(doc.name(rect), Some(&QName::new("svg", "rect")));
        let attrs = doc.attributes(rect);
        assert_eq!(attrs[0].name, QName::new("xlink", "href"));
        assert_eq!(attrs[1].name, QName::local("width"));
        assert_eq!(attrs[1].value, "2");
    }

    #[test]
    fn test_parse_text_is_unescaped_and_concatenated() {
        let doc = parse_str("<a>x &amp; y<b/>z</a>").unwrap();
        let a = doc.root_element().unwrap();
        assert_eq!(doc.value(a), "x & yz");
    }

    #[test]
    fn test_parse_attribute_is_unescaped() {
        let doc = parse_str(r#"<a title="&lt;b&gt;"/>"#).unwrap();
        let a = doc.root_element().unwrap();
        assert_eq!(doc.attributes(a)[0].value, "<b>");
    }

    #[test]
    fn test_parse_cdata_is_raw() {
        let doc = parse_str("<a><![CDATA[<raw> & stuff]]></a>").unwrap();
        let a = doc.root_element().unwrap();
        assert_eq!(doc.value(a), "<raw> & stuff");
    }

    #[test]
    fn test_parse_trims_whitespace_by_default() {
        let doc = parse_str("<a>\n  <b>  v  </b>\n</a>").unwrap();
        let a = doc.root_element().unwrap();
        let b = doc.first_child(a).unwrap();
        assert_eq!(doc.value(a), "");
        assert_eq!(doc.value(b), "v");
    }

    #[test]
    fn test_parse_keeps_whitespace_when_asked() {
        let opts = ParseOptions::default().trim_text(false);
        let doc = parse_str_with_options("<a> v </a>", &opts).unwrap();
        let a = doc.root_element().unwrap();
        assert_eq!(doc.value(a), " v ");
    }

    #[test]
    fn test_parse_prolog_nodes() {
        let input = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                     <!DOCTYPE note>\
                     <?xml-stylesheet href=\"a.css\"?>\
                     <!-- hello -->\
                     <note/>";
        let doc = parse_str(input).unwrap();
        let kinds: Vec<NodeKind> = doc
            .children(doc.root())
            .map(|id| doc.kind(id).clone())
            .collect();

        assert_eq!(
            kinds[0],
            NodeKind::processing_instruction("xml", "version=\"1.0\" encoding=\"UTF-8\"")
        );
        assert_eq!(kinds[1], NodeKind::directive("DOCTYPE note"));
        assert_eq!(
            kinds[2],
            NodeKind::processing_instruction("xml-stylesheet", "href=\"a.css\"")
        );
        assert_eq!(kinds[3], NodeKind::comment("hello"));
        assert!(matches!(kinds[4], NodeKind::Element { .. }));
    }

    #[test]
    fn test_parse_drops_declaration_and_comments_when_asked() {
        let opts = ParseOptions::default()
            .keep_declaration(false)
            .keep_comments(false);
        let doc = parse_str_with_options("<?xml version=\"1.0\"?><!--c--><a/>", &opts).unwrap();
        assert_eq!(doc.children(doc.root()).count(), 1);
    }

    #[test]
    fn test_parse_mismatched_end_tag_fails() {
        assert!(parse_str("<a><b></a></b>").is_err());
    }

    #[test]
    fn test_parse_unclosed_element_fails() {
        let err = parse_str("<a><b></b>").unwrap_err();
        assert!(err.message.contains("unclosed element <a>"));
    }

    #[test]
    fn test_parse_depth_limit() {
        let opts = ParseOptions::default().max_depth(2);
        assert!(parse_str_with_options("<a><b/></a>", &opts).is_ok());
        let err = parse_str_with_options("<a><b><c/></b></a>", &opts).unwrap_err();
        assert!(err.message.contains("nesting depth"));
    }
}
