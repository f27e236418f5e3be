//! Derived-descriptor generation.
//!
//! Takes a source BMFont descriptor, rescales its metrics for an atlas
//! regenerated at reduced resolution, rewrites the texture reference to the
//! derived image, and writes the result as XML next to the input. The
//! derived atlas image itself comes from external tooling; only the metrics
//! are handled here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

/// Bounds accepted for the rescale factor, matching the atlas
/// regeneration tooling.
pub const MIN_FACTOR: i32 = 1;
pub const MAX_FACTOR: i32 = 8;

/// Suffix marking derived descriptors and textures.
const DERIVED_SUFFIX: &str = "_dist";

/// Output descriptor path: the input file name with a `_dist` marker
/// before the extension (`fonts/ui.fnt` -> `fonts/ui_dist.fnt`).
pub fn derived_descriptor_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{DERIVED_SUFFIX}.fnt"))
}

/// Texture reference for the derived atlas. The regenerated image is
/// always PNG-encoded, whatever the source format was
/// (`ui.tga` -> `ui_dist.png`).
pub fn derived_texture_name(texture: &str) -> String {
    let stem = texture.rfind('.').map_or(texture, |dot| &texture[..dot]);
    format!("{stem}{DERIVED_SUFFIX}.png")
}

/// Parse the input descriptor, rescale it by `factor`, and write the
/// derived XML descriptor. Returns the output path.
pub fn run(input: &Path, factor: i32) -> anyhow::Result<PathBuf> {
    if !input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("fnt"))
    {
        bail!("only .fnt descriptors are supported: {}", input.display());
    }
    if !(MIN_FACTOR..=MAX_FACTOR).contains(&factor) {
        bail!("scale factor must be between {MIN_FACTOR} and {MAX_FACTOR}, got {factor}");
    }

    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let mut font = sdfont_bmfont::parse_bytes(&raw)
        .with_context(|| format!("parsing {}", input.display()))?;
    tracing::debug!("source atlas: {}", font.texture_file_name);

    font.texture_file_name = derived_texture_name(&font.texture_file_name);
    sdfont_bmfont::rescale(&mut font, factor)?;

    let output = derived_descriptor_path(input);
    let xml = sdfont_bmfont::write_xml(&font)?;
    fs::write(&output, xml).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!("wrote rescaled descriptor to {}", output.display());

    Ok(output)
}
