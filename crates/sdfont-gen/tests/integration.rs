//! Integration tests - Full pipeline from descriptor file to derived output
//!
//! Exercises the complete workflow: read .fnt -> parse -> rescale -> write XML

use std::fs;
use std::path::PathBuf;

use sdfont_gen::run;

const SOURCE_FONT: &str = "\
info face=\"Test\" size=32\n\
common lineHeight=32 scaleW=512 scaleH=512 pages=1\n\
page id=0 file=\"atlas.png\"\n\
chars count=2\n\
char id=65 x=0 y=0 width=20 height=24 xoffset=0 yoffset=4 xadvance=22\n\
char id=66 x=20 y=0 width=18 height=24 xoffset=1 yoffset=4 xadvance=20\n\
kernings count=1\n\
kerning first=65 second=66 amount=-2\n";

fn write_source(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, SOURCE_FONT).unwrap();
    path
}

#[test]
fn test_generates_derived_descriptor() {
    let input = write_source("sdfont_gen_basic.fnt");
    let output = run(&input, 4).unwrap();
    assert_eq!(output, std::env::temp_dir().join("sdfont_gen_basic_dist.fnt"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("<?xml"));
    assert!(written.contains(r#"file="atlas_dist.png""#));
    assert!(written.contains(r#"<common lineHeight="8" scaleW="128" scaleH="128" pages="1" />"#));
    assert!(written.contains("<chars count=\"2\">"));
    // Kern amounts are not atlas coordinates and keep their values
    assert!(written.contains(r#"<kerning first="65" second="66" amount="-2" />"#));

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn test_factor_one_still_reencodes_to_xml() {
    let input = write_source("sdfont_gen_factor1.fnt");
    let output = run(&input, 1).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains(r#"<common lineHeight="32" scaleW="512" scaleH="512" pages="1" />"#));
    assert!(written.contains(r#"file="atlas_dist.png""#));

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn test_output_parses_back_with_core_crate() {
    let input = write_source("sdfont_gen_reparse.fnt");
    let output = run(&input, 2).unwrap();

    let bytes = fs::read(&output).unwrap();
    let font = sdfont_bmfont::parse_bytes(&bytes).unwrap();
    assert_eq!(font.atlas_width, 256);
    assert_eq!(font.glyphs.len(), 2);
    assert_eq!(font.kern_pairs.len(), 1);
    assert_eq!(font.texture_file_name, "atlas_dist.png");

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn test_missing_input_file_reports_path() {
    let missing = std::env::temp_dir().join("sdfont_gen_missing.fnt");
    let err = run(&missing, 4).unwrap_err();
    assert!(err.to_string().contains("sdfont_gen_missing.fnt"));
}

#[test]
fn test_unparseable_input_reports_parse_error() {
    let path = std::env::temp_dir().join("sdfont_gen_bad.fnt");
    fs::write(&path, "this is not a font descriptor\n").unwrap();
    let err = run(&path, 4).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("not a BMFont descriptor"));

    fs::remove_file(&path).ok();
}
