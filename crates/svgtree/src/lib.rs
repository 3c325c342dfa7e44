//! svgtree - SVG documents as comparable, queryable element trees
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), svgtree::Error> {
//! let root = svgtree::parse_str(r#"<svg id="root"><rect id="r1"/><circle id="c1"/></svg>"#)?;
//!
//! assert_eq!(root.name, "svg");
//! assert_eq!(root.find_by_id("r1").map(|e| e.name.as_str()), Some("rect"));
//! assert!(root.find_by_id("root").is_none());
//!
//! let xml = root.to_xml_string()?;
//! assert_eq!(svgtree::parse_str(&xml)?, root);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod charset;
pub mod compare;
pub mod config;
pub mod decoder;
pub mod element;
pub mod error;
pub mod query;
pub mod serializer;

pub use config::{ParserConfig, SerializeConfig};
pub use decoder::Parser;
pub use element::{Attributes, Element};
pub use error::{Error, Result};
pub use query::{find_by_content, Descendants};
pub use serializer::Serializer;

use std::io::Read;

/// Parse an SVG document from any reader.
///
/// `validate` is accepted for compatibility and currently has no effect.
pub fn parse<R: Read>(source: R, validate: bool) -> Result<Element> {
    Parser::with_config(ParserConfig::default().with_validate(validate)).parse_reader(source)
}

/// Parse an SVG document from bytes, detecting its character set
pub fn parse_bytes(bytes: &[u8]) -> Result<Element> {
    Parser::new().parse(bytes)
}

/// Parse an SVG document that is already text; encoding declarations are ignored
pub fn parse_str(s: &str) -> Result<Element> {
    Parser::new().parse_str(s)
}
