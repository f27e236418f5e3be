//! Structured (XML) BMFont grammar.

use roxmltree::{Document, Node};

use crate::{BmFontError, FontDescriptor, Glyph, KernPair, Result};

/// Attempt the structured grammar.
///
/// Returns `None` when the input is not a well-formed XML document with a
/// `font` root; the caller falls back to the text grammar on that and only
/// that. A failure inside a recognized document is final.
pub(crate) fn try_parse(input: &str) -> Option<Result<FontDescriptor>> {
    let doc = Document::parse(input).ok()?;
    let root = doc.root_element();
    if root.tag_name().name() != "font" {
        return None;
    }
    Some(parse_font(root))
}

fn parse_font(root: Node<'_, '_>) -> Result<FontDescriptor> {
    let common = element(root, "common").ok_or(BmFontError::MissingOrInvalidField {
        record: "common",
        field: "lineHeight",
    })?;

    let mut font = FontDescriptor {
        line_height: int_attr(common, "common", "lineHeight")?,
        atlas_width: int_attr(common, "common", "scaleW")?,
        atlas_height: int_attr(common, "common", "scaleH")?,
        ..FontDescriptor::default()
    };

    let pages = int_attr(common, "common", "pages")?;
    if pages != 1 {
        return Err(BmFontError::UnsupportedMultiPage(pages));
    }

    let pages_element = element(root, "pages").ok_or(BmFontError::MissingOrInvalidField {
        record: "page",
        field: "file",
    })?;
    for page in children(pages_element, "page") {
        font.texture_file_name = str_attr(page, "page", "file")?;
    }
    if font.texture_file_name.is_empty() {
        return Err(BmFontError::MissingOrInvalidField {
            record: "page",
            field: "file",
        });
    }

    if let Some(chars) = element(root, "chars") {
        for node in children(chars, "char") {
            font.glyphs.push(Glyph {
                id: int_attr(node, "char", "id")?,
                x: int_attr(node, "char", "x")?,
                y: int_attr(node, "char", "y")?,
                width: int_attr(node, "char", "width")?,
                height: int_attr(node, "char", "height")?,
                xoffset: int_attr(node, "char", "xoffset")?,
                yoffset: int_attr(node, "char", "yoffset")?,
                xadvance: int_attr(node, "char", "xadvance")?,
            });
        }
    }

    if let Some(kernings) = element(root, "kernings") {
        for node in children(kernings, "kerning") {
            font.kern_pairs.push(KernPair {
                first: int_attr(node, "kerning", "first")?,
                second: int_attr(node, "kerning", "second")?,
                amount: int_attr(node, "kerning", "amount")?,
            });
        }
    }

    Ok(font)
}

fn element<'a, 'i>(parent: Node<'a, 'i>, name: &'static str) -> Option<Node<'a, 'i>> {
    parent.children().find(|n| n.has_tag_name(name))
}

fn children<'a, 'i>(
    parent: Node<'a, 'i>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'i>> {
    parent.children().filter(move |n| n.has_tag_name(name))
}

fn int_attr(node: Node<'_, '_>, record: &'static str, field: &'static str) -> Result<i32> {
    node.attribute(field)
        .and_then(|value| value.parse().ok())
        .ok_or(BmFontError::MissingOrInvalidField { record, field })
}

fn str_attr(node: Node<'_, '_>, record: &'static str, field: &'static str) -> Result<String> {
    let value = node
        .attribute(field)
        .ok_or(BmFontError::MissingOrInvalidField { record, field })?;
    Ok(value.trim_matches('"').to_string())
}
