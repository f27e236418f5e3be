//! sdfont BMFont - Bitmap Font Descriptor Toolkit
//!
//! This crate handles the metrics side of distance-field atlas regeneration:
//! - Parsing BMFont descriptors in both the XML and the text encoding
//! - Rescaling all spatial metrics when the atlas is regenerated smaller
//! - Serializing descriptors back to canonical XML
//!
//! The atlas image itself is produced by external tooling; this crate only
//! ever sees the descriptor.

pub mod descriptor;
mod parse;
mod rescale;
mod write;

pub use descriptor::{FontDescriptor, Glyph, KernPair};
pub use parse::{parse, parse_bytes};
pub use rescale::rescale;
pub use write::write_xml;

/// Descriptor processing error types
#[derive(Debug, thiserror::Error)]
pub enum BmFontError {
    #[error("input is not a BMFont descriptor in either supported encoding")]
    MalformedDocument,

    #[error("only single-page fonts are supported (descriptor declares {0} pages)")]
    UnsupportedMultiPage(i32),

    #[error("descriptor contains no glyphs")]
    EmptyGlyphSet,

    #[error("missing or invalid '{field}' in '{record}' record")]
    MissingOrInvalidField {
        record: &'static str,
        field: &'static str,
    },

    #[error("rescale factor must be positive, got {0}")]
    InvalidRescaleFactor(i32),

    #[error("xml serialization failed: {0}")]
    Xml(#[from] xml::writer::Error),
}

pub type Result<T> = std::result::Result<T, BmFontError>;
