//! Character-set detection and transcoding.
//!
//! Input is converted to UTF-8 before it reaches the tokenizer:
//!
//! 1. A byte order mark selects the encoding and is stripped.
//! 2. Otherwise the `encoding` label of an ASCII-compatible `<?xml ...?>`
//!    prolog selects it.
//! 3. Otherwise the document is UTF-8.
//!
//! A declared label that `encoding_rs` does not recognize is an error, as is
//! any byte sequence that is malformed in the selected encoding.

use std::borrow::Cow;

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};
use tracing::debug;

use crate::error::{Error, Result};

/// How far into the input the XML declaration is searched for
const PROLOG_SCAN_LIMIT: usize = 1024;

/// Decode raw document bytes into UTF-8 text
pub fn decode_to_utf8(bytes: &[u8]) -> Result<Cow<'_, str>> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = encoding.name(), "byte order mark found");
        let body = bytes.get(bom_len..).unwrap_or_default();
        let text = transcode(body, encoding)?;
        // The BOM wins, but a declared label still has to be a known one.
        if let Some(label) = declared_label(text.as_bytes()) {
            resolve_label(&label)?;
        }
        return Ok(text);
    }

    let encoding = match declared_label(bytes) {
        Some(label) => resolve_label(&label)?,
        None => UTF_8,
    };
    debug!(encoding = encoding.name(), "decoding document");
    transcode(bytes, encoding)
}

/// Map a declared label to the encoding used for decoding.
///
/// UTF-16 labels found in an ASCII-readable prolog cannot be right and fall
/// back to UTF-8.
fn resolve_label(label: &str) -> Result<&'static Encoding> {
    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) if encoding != REPLACEMENT => Ok(encoding.output_encoding()),
        _ => Err(Error::UnknownCharset {
            label: label.to_string(),
        }),
    }
}

fn transcode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(Error::Transcode {
            encoding: encoding.name(),
        })
}

/// Extract the `encoding="..."` value from a leading XML declaration
fn declared_label(bytes: &[u8]) -> Option<String> {
    let head = bytes.get(..bytes.len().min(PROLOG_SCAN_LIMIT))?;
    let decl = head.strip_prefix(b"<?xml")?;
    if !decl.first().is_some_and(u8::is_ascii_whitespace) {
        return None;
    }

    let decl = decl.get(..find(decl, b"?>")?)?;
    let after = decl.get(find(decl, b"encoding")? + b"encoding".len()..)?;
    let after = skip_ascii_whitespace(after).strip_prefix(b"=")?;
    let (&quote, rest) = skip_ascii_whitespace(after).split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let label = rest.get(..rest.iter().position(|&b| b == quote)?)?;
    label
        .is_ascii()
        .then(|| String::from_utf8_lossy(label).into_owned())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn skip_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let skip = bytes
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();
    bytes.get(skip..).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8_is_borrowed() {
        let text = decode_to_utf8(b"<svg/>").ok();
        assert!(matches!(text, Some(Cow::Borrowed("<svg/>"))));
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let text = decode_to_utf8(b"\xEF\xBB\xBF<svg/>").ok();
        assert_eq!(text.as_deref(), Some("<svg/>"));
    }

    #[test]
    fn test_declared_latin1() {
        let input = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><t>caf\xE9</t>";
        let text = decode_to_utf8(input).ok();
        assert_eq!(
            text.as_deref(),
            Some("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><t>caf\u{e9}</t>")
        );
    }

    #[test]
    fn test_unknown_label() {
        let input = b"<?xml version='1.0' encoding='x-no-such-charset'?><svg/>";
        match decode_to_utf8(input) {
            Err(Error::UnknownCharset { label }) => assert_eq!(label, "x-no-such-charset"),
            other => panic!("expected charset error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_without_declaration() {
        let result = decode_to_utf8(b"<t>\xFF\xFE\xFD</t>");
        assert!(matches!(result, Err(Error::Transcode { encoding: "UTF-8" })));
    }

    #[test]
    fn test_utf16le_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend("<svg id=\"a\"/>".encode_utf16().flat_map(u16::to_le_bytes));
        let text = decode_to_utf8(&bytes).ok();
        assert_eq!(text.as_deref(), Some("<svg id=\"a\"/>"));
    }

    #[test]
    fn test_declared_utf16_in_ascii_prolog_reads_as_utf8() {
        let input = b"<?xml version=\"1.0\" encoding=\"UTF-16\"?><svg/>";
        let text = decode_to_utf8(input).ok();
        assert_eq!(text.as_deref().map(str::len), Some(input.len()));
    }

    #[test]
    fn test_declared_label_extraction() {
        assert_eq!(
            declared_label(b"<?xml version=\"1.0\" encoding = 'windows-1252' ?><a/>"),
            Some("windows-1252".to_string())
        );
        assert_eq!(declared_label(b"<?xml version=\"1.0\"?><a/>"), None);
        assert_eq!(declared_label(b"<a/>"), None);
        assert_eq!(
            declared_label(b"<?xml-stylesheet href=\"a.css\" encoding=\"x\"?>"),
            None
        );
        assert_eq!(declared_label(b"<?xml encoding=\"unterminated"), None);
    }
}
