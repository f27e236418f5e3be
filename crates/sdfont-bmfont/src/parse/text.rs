//! Line-oriented BMFont grammar.
//!
//! One record per line: a tag token followed by space-delimited `key=value`
//! pairs. Values may be double-quoted; quotes are stripped. Unknown tags
//! (`info`, `chars`, `kernings`, anything newer) are skipped.

use crate::{BmFontError, FontDescriptor, Glyph, KernPair, Result};

pub(crate) fn parse(input: &str) -> Result<FontDescriptor> {
    let mut font = FontDescriptor::default();
    let mut saw_common = false;
    let mut saw_page = false;
    let mut recognized = false;

    for line in input.lines() {
        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens.first().copied() {
            Some("common") => {
                recognized = true;
                font.line_height = int_field(&tokens, "common", "lineHeight")?;
                font.atlas_width = int_field(&tokens, "common", "scaleW")?;
                font.atlas_height = int_field(&tokens, "common", "scaleH")?;
                let pages = int_field(&tokens, "common", "pages")?;
                if pages != 1 {
                    return Err(BmFontError::UnsupportedMultiPage(pages));
                }
                saw_common = true;
            }
            Some("page") => {
                recognized = true;
                font.texture_file_name = str_field(&tokens, "page", "file")?;
                saw_page = true;
            }
            Some("char") => {
                recognized = true;
                font.glyphs.push(Glyph {
                    id: int_field(&tokens, "char", "id")?,
                    x: int_field(&tokens, "char", "x")?,
                    y: int_field(&tokens, "char", "y")?,
                    width: int_field(&tokens, "char", "width")?,
                    height: int_field(&tokens, "char", "height")?,
                    xoffset: int_field(&tokens, "char", "xoffset")?,
                    yoffset: int_field(&tokens, "char", "yoffset")?,
                    xadvance: int_field(&tokens, "char", "xadvance")?,
                });
            }
            Some("kerning") => {
                recognized = true;
                font.kern_pairs.push(KernPair {
                    first: int_field(&tokens, "kerning", "first")?,
                    second: int_field(&tokens, "kerning", "second")?,
                    amount: int_field(&tokens, "kerning", "amount")?,
                });
            }
            _ => {}
        }
    }

    if !recognized {
        return Err(BmFontError::MalformedDocument);
    }
    if !saw_common {
        return Err(BmFontError::MissingOrInvalidField {
            record: "common",
            field: "lineHeight",
        });
    }
    if !saw_page || font.texture_file_name.is_empty() {
        return Err(BmFontError::MissingOrInvalidField {
            record: "page",
            field: "file",
        });
    }

    Ok(font)
}

/// Linear scan for a token of the form `key=value`, returning the value
/// with any double quotes stripped. A bare `key=` counts as absent.
fn find_key_value(tokens: &[&str], key: &str) -> Option<String> {
    tokens.iter().find_map(|token| {
        let value = token.strip_prefix(key)?.strip_prefix('=')?;
        if value.is_empty() {
            None
        } else {
            Some(value.replace('"', ""))
        }
    })
}

fn int_field(tokens: &[&str], record: &'static str, field: &'static str) -> Result<i32> {
    find_key_value(tokens, field)
        .and_then(|value| value.parse().ok())
        .ok_or(BmFontError::MissingOrInvalidField { record, field })
}

fn str_field(tokens: &[&str], record: &'static str, field: &'static str) -> Result<String> {
    find_key_value(tokens, field).ok_or(BmFontError::MissingOrInvalidField { record, field })
}
