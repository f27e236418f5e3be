//! Canonical in-memory form of a BMFont descriptor.

/// One character's metrics entry within the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    /// Character code. Not unique by construction; duplicates keep
    /// their source order.
    pub id: i32,
    /// Top-left pixel position in the atlas
    pub x: i32,
    pub y: i32,
    /// Pixel size of the glyph rectangle
    pub width: i32,
    pub height: i32,
    /// Render offset from the pen position (may be negative)
    pub xoffset: i32,
    pub yoffset: i32,
    /// Horizontal pen advance
    pub xadvance: i32,
}

/// Signed advance correction applied between two adjacent glyph ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KernPair {
    pub first: i32,
    pub second: i32,
    pub amount: i32,
}

/// A parsed font descriptor referencing a single-page glyph atlas.
///
/// Glyphs and kern pairs preserve the order they appeared in the source
/// document, so writing a descriptor back out keeps record order stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontDescriptor {
    /// Relative path of the atlas image
    pub texture_file_name: String,
    /// Atlas pixel dimensions (scaleW/scaleH in BMFont terms)
    pub atlas_width: i32,
    pub atlas_height: i32,
    /// Vertical advance between text lines
    pub line_height: i32,
    pub glyphs: Vec<Glyph>,
    pub kern_pairs: Vec<KernPair>,
}
