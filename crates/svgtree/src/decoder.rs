//! Decoder from XML events to an element tree
//!
//! The tokenizer is `quick_xml::Reader` running over the transcoded input.
//! Descent uses an explicit stack of open elements, so nesting depth is only
//! bounded by memory (or by [`ParserConfig::max_depth`]).

use std::io::Read;
use std::mem;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, instrument, trace, warn};

use crate::charset;
use crate::config::ParserConfig;
use crate::element::Element;
use crate::error::{Error, Result};

/// SVG document parser
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a whole document held in memory, detecting its character set.
    ///
    /// A document without any element yields [`Element::default`]. Input
    /// that ends before every element is closed yields the partial tree.
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn parse(&self, input: &[u8]) -> Result<Element> {
        self.config.validate_size(input.len())?;
        let text = charset::decode_to_utf8(input)?;
        self.decode(&text)
    }

    /// Parse text that is already decoded; any encoding declaration is ignored
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn parse_str(&self, text: &str) -> Result<Element> {
        self.config.validate_size(text.len())?;
        self.decode(text.strip_prefix('\u{feff}').unwrap_or(text))
    }

    /// Read `source` to the end, then parse it
    pub fn parse_reader<R: Read>(&self, mut source: R) -> Result<Element> {
        let mut raw = Vec::new();
        source.read_to_end(&mut raw)?;
        self.parse(&raw)
    }

    fn decode(&self, text: &str) -> Result<Element> {
        if self.config.validate {
            debug!("validation requested; no checks are performed");
        }

        let mut reader = Reader::from_str(text);
        let reader_config = reader.config_mut();
        reader_config.expand_empty_elements = true;
        reader_config.check_end_names = self.config.check_end_names;
        reader_config.allow_unmatched_ends = !self.config.check_end_names;

        let Some(root) = decode_first(&mut reader)? else {
            debug!("no root element found");
            return Ok(Element::default());
        };
        self.config.validate_depth(1)?;
        self.decode_subtree(&mut reader, root)
    }

    fn decode_subtree(&self, reader: &mut Reader<&[u8]>, root: Element) -> Result<Element> {
        let mut current = root;
        let mut ancestors: Vec<Element> = Vec::new();

        loop {
            match next_event(reader)? {
                Event::Start(start) => {
                    let depth = ancestors.len() + 2;
                    self.config.validate_depth(depth)?;
                    let child = new_element(&start).map_err(|e| syntax_error(reader, e))?;
                    trace!(name = %child.name, depth, "open element");
                    ancestors.push(mem::replace(&mut current, child));
                }
                Event::Text(text) => {
                    let chunk = text.unescape().map_err(|e| syntax_error(reader, e))?;
                    current.record_text(&chunk);
                }
                Event::CData(data) => current.record_text(&String::from_utf8_lossy(&data)),
                Event::End(end) => {
                    if end.local_name().as_ref() != current.name.as_bytes() {
                        warn!(
                            open = %current.name,
                            position = reader.buffer_position(),
                            "ignoring end tag of another element"
                        );
                        continue;
                    }
                    match ancestors.pop() {
                        Some(parent) => {
                            let child = mem::replace(&mut current, parent);
                            current.children.push(child);
                        }
                        None => return Ok(current),
                    }
                }
                Event::Eof => {
                    debug!(
                        open = ancestors.len() + 1,
                        "input ended before all elements were closed"
                    );
                    while let Some(parent) = ancestors.pop() {
                        let child = mem::replace(&mut current, parent);
                        current.children.push(child);
                    }
                    return Ok(current);
                }
                _ => {}
            }
        }
    }
}

/// Skip everything up to the first start tag
fn decode_first(reader: &mut Reader<&[u8]>) -> Result<Option<Element>> {
    loop {
        match next_event(reader)? {
            Event::Start(start) => {
                let root = new_element(&start).map_err(|e| syntax_error(reader, e))?;
                trace!(name = %root.name, "open root element");
                return Ok(Some(root));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn next_event<'i>(reader: &mut Reader<&'i [u8]>) -> Result<Event<'i>> {
    reader.read_event().map_err(|e| syntax_error(reader, e))
}

fn new_element(start: &BytesStart<'_>) -> quick_xml::Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

fn syntax_error(reader: &Reader<&[u8]>, source: quick_xml::Error) -> Error {
    Error::Syntax {
        position: u64::try_from(reader.buffer_position()).unwrap_or(u64::MAX),
        source,
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Parser::new().parse_str(s)
    }
}
