//! Canonical XML serialization.
//!
//! Output is always the structured encoding, regardless of which grammar
//! the descriptor was parsed from. Count attributes are derived from the
//! sequences, never caller-supplied.

use xml::common::XmlVersion;
use xml::writer::{EmitterConfig, XmlEvent};

use crate::{FontDescriptor, Result};

/// Serialize a descriptor to the canonical XML document, UTF-8 with a
/// standard declaration.
pub fn write_xml(font: &FontDescriptor) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut writer = EmitterConfig::new()
        .perform_indent(true)
        .create_writer(&mut out);

    writer.write(XmlEvent::StartDocument {
        version: XmlVersion::Version10,
        encoding: Some("utf-8"),
        standalone: None,
    })?;

    writer.write(XmlEvent::start_element("font"))?;

    writer.write(
        XmlEvent::start_element("common")
            .attr("lineHeight", &font.line_height.to_string())
            .attr("scaleW", &font.atlas_width.to_string())
            .attr("scaleH", &font.atlas_height.to_string())
            .attr("pages", "1"),
    )?;
    writer.write(XmlEvent::end_element())?;

    writer.write(XmlEvent::start_element("pages"))?;
    writer.write(
        XmlEvent::start_element("page")
            .attr("id", "0")
            .attr("file", &font.texture_file_name),
    )?;
    writer.write(XmlEvent::end_element())?;
    writer.write(XmlEvent::end_element())?;

    writer.write(
        XmlEvent::start_element("chars").attr("count", &font.glyphs.len().to_string()),
    )?;
    for glyph in &font.glyphs {
        writer.write(
            XmlEvent::start_element("char")
                .attr("id", &glyph.id.to_string())
                .attr("x", &glyph.x.to_string())
                .attr("y", &glyph.y.to_string())
                .attr("width", &glyph.width.to_string())
                .attr("height", &glyph.height.to_string())
                .attr("xoffset", &glyph.xoffset.to_string())
                .attr("yoffset", &glyph.yoffset.to_string())
                .attr("xadvance", &glyph.xadvance.to_string()),
        )?;
        writer.write(XmlEvent::end_element())?;
    }
    writer.write(XmlEvent::end_element())?;

    writer.write(
        XmlEvent::start_element("kernings").attr("count", &font.kern_pairs.len().to_string()),
    )?;
    for kerning in &font.kern_pairs {
        writer.write(
            XmlEvent::start_element("kerning")
                .attr("first", &kerning.first.to_string())
                .attr("second", &kerning.second.to_string())
                .attr("amount", &kerning.amount.to_string()),
        )?;
        writer.write(XmlEvent::end_element())?;
    }
    writer.write(XmlEvent::end_element())?;

    writer.write(XmlEvent::end_element())?;

    Ok(out)
}
