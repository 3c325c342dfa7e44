//! Serialization of element trees back to XML

use std::io::{self, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::instrument;

use crate::config::SerializeConfig;
use crate::element::Element;
use crate::error::{Error, Result};

/// Writes an element tree as XML events to any `Write` sink
pub struct Serializer<W: Write> {
    writer: Writer<W>,
    config: SerializeConfig,
}

impl<W: Write> Serializer<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, SerializeConfig::default())
    }

    pub fn with_config(sink: W, config: SerializeConfig) -> Self {
        let writer = match config.indent {
            Some(width) => Writer::new_with_indent(sink, b' ', width),
            None => Writer::new(sink),
        };
        Self { writer, config }
    }

    /// Write `element` and its subtree, then flush the sink.
    ///
    /// Output written before a failure stays in the sink.
    #[instrument(skip_all, fields(root = %element.name))]
    pub fn serialize(&mut self, element: &Element) -> Result<()> {
        if self.config.xml_declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        self.write_element(element)?;
        self.writer.get_mut().flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_element(&mut self, element: &Element) -> Result<()> {
        if element.name.is_empty() {
            return Err(Error::UnnamedElement);
        }

        let mut start = BytesStart::new(element.name.as_str());
        let mut attributes: Vec<(&str, &str)> = element
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if self.config.sort_attributes {
            attributes.sort_by_key(|(k, _)| *k);
        }
        start.extend_attributes(attributes);
        self.writer.write_event(Event::Start(start))?;

        if !element.content.is_empty() {
            self.writer
                .write_event(Event::Text(BytesText::new(&element.content)))?;
        }

        for child in &element.children {
            self.write_element(child)?;
        }

        self.writer
            .write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        Ok(())
    }
}

impl Element {
    /// Serialize this tree to `sink` with the default configuration
    pub fn write_to<W: Write>(&self, sink: W) -> Result<()> {
        Serializer::new(sink).serialize(self)
    }

    /// Serialize this tree into a string
    pub fn to_xml_string(&self) -> Result<String> {
        self.to_xml_string_with(SerializeConfig::default())
    }

    pub fn to_xml_string_with(&self, config: SerializeConfig) -> Result<String> {
        let mut serializer = Serializer::with_config(Vec::new(), config);
        serializer.serialize(self)?;
        utf8_output(serializer.into_inner())
    }
}

fn utf8_output(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
