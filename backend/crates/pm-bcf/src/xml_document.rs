//! Thin wrapper over `quick_xml::Writer` for the small documents in a package.

use crate::{BcfError, BcfResult};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

pub(crate) const XSI_NAMESPACE: (&str, &str) =
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance");
pub(crate) const XSD_NAMESPACE: (&str, &str) = ("xmlns:xsd", "http://www.w3.org/2001/XMLSchema");

pub(crate) struct XmlDocument {
    name: &'static str,
    writer: Writer<Vec<u8>>,
}

impl XmlDocument {
    /// Start a document with the XML declaration and a header comment.
    pub(crate) fn new(name: &'static str, header_comment: &str) -> BcfResult<Self> {
        let mut document = Self {
            name,
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        };
        document.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        document.write(Event::Comment(BytesText::from_escaped(header_comment)))?;
        Ok(document)
    }

    pub(crate) fn start(&mut self, tag: &str, attributes: &[(&str, &str)]) -> BcfResult<()> {
        let start = BytesStart::new(tag).with_attributes(attributes.iter().copied());
        self.write(Event::Start(start))
    }

    pub(crate) fn end(&mut self, tag: &str) -> BcfResult<()> {
        self.write(Event::End(BytesEnd::new(tag)))
    }

    pub(crate) fn empty(&mut self, tag: &str, attributes: &[(&str, &str)]) -> BcfResult<()> {
        let empty = BytesStart::new(tag).with_attributes(attributes.iter().copied());
        self.write(Event::Empty(empty))
    }

    /// `<tag>text</tag>`, with the text escaped.
    ///
    /// The text event is written even when empty so the closing tag stays on
    /// the same line.
    pub(crate) fn text_element(&mut self, tag: &str, text: &str) -> BcfResult<()> {
        self.start(tag, &[])?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.end(tag)
    }

    pub(crate) fn finish(self) -> BcfResult<String> {
        let name = self.name;
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| BcfError::io_other(format!("encoding {name}"), e))
    }

    fn write(&mut self, event: Event<'_>) -> BcfResult<()> {
        let name = self.name;
        self.writer
            .write_event(event)
            .map_err(|e| BcfError::io_other(format!("writing {name}"), e))
    }
}
