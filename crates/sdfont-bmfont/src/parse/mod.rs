//! Descriptor parsing with encoding auto-detection.
//!
//! BMFont exporters produce either an XML document or a line-oriented
//! key=value text file, without declaring which. The XML grammar is tried
//! first; the text grammar is the fallback when the input is not a
//! well-formed `<font>` document. A semantic rejection inside a recognized
//! XML document (multi-page, missing attribute) is final and is never
//! retried under the text grammar.

mod text;
mod xml;

use crate::{BmFontError, FontDescriptor, Result};

/// Parse a BMFont descriptor, auto-detecting the encoding.
pub fn parse(input: &str) -> Result<FontDescriptor> {
    let font = match xml::try_parse(input) {
        Some(result) => {
            tracing::debug!("descriptor recognized as XML");
            result?
        }
        None => {
            tracing::debug!("descriptor is not well-formed XML, trying text grammar");
            text::parse(input)?
        }
    };

    if font.glyphs.is_empty() {
        return Err(BmFontError::EmptyGlyphSet);
    }

    tracing::debug!(
        "parsed descriptor: {} glyphs, {} kern pairs, atlas {}",
        font.glyphs.len(),
        font.kern_pairs.len(),
        font.texture_file_name
    );
    Ok(font)
}

/// Parse a descriptor from raw file bytes.
///
/// Both encodings are UTF-8/ASCII text; bytes that do not decode are
/// rejected as malformed.
pub fn parse_bytes(input: &[u8]) -> Result<FontDescriptor> {
    let text = std::str::from_utf8(input).map_err(|_| BmFontError::MalformedDocument)?;
    parse(text)
}
