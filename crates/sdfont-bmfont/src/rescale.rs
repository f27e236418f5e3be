//! Metric rescaling for regenerated atlases.

use crate::{BmFontError, FontDescriptor, Result};

/// Divide every spatial field of the descriptor by `factor`, truncating
/// toward zero.
///
/// Applied when the atlas image is regenerated at `1/factor` resolution,
/// e.g. for a derived distance-field atlas. Kern amounts are advance
/// corrections, not atlas coordinates, and are left untouched.
///
/// Truncation discards remainders, so rescaling is lossy: a glyph of width 7
/// rescaled by 4 becomes width 1, and no later step can recover the ratio.
pub fn rescale(font: &mut FontDescriptor, factor: i32) -> Result<()> {
    if factor <= 0 {
        return Err(BmFontError::InvalidRescaleFactor(factor));
    }
    if factor == 1 {
        return Ok(());
    }

    font.atlas_width /= factor;
    font.atlas_height /= factor;
    font.line_height /= factor;

    for glyph in &mut font.glyphs {
        glyph.x /= factor;
        glyph.y /= factor;
        glyph.width /= factor;
        glyph.height /= factor;
        glyph.xoffset /= factor;
        glyph.yoffset /= factor;
        glyph.xadvance /= factor;
    }

    Ok(())
}
