//! Assertion helpers for written posters.

use std::path::Path;

use image::{Rgb, RgbImage};
use pretty_assertions::assert_eq;
use tritone::Palette;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Read a written poster back as RGB
pub fn read_poster(path: &Path) -> RgbImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {}", path.display(), e))
        .to_rgb8()
}

/// Assert the file is a PNG and every pixel is a palette colour
pub fn assert_palette_png(path: &Path, palette: &Palette) -> RgbImage {
    let bytes = std::fs::read(path).expect("Failed to read output");
    assert_eq!(
        &bytes[..8],
        &PNG_SIGNATURE[..],
        "Expected PNG signature in {}",
        path.display()
    );

    let poster = read_poster(path);
    for (x, y, pixel) in poster.enumerate_pixels() {
        assert!(
            palette.index_of(*pixel).is_some(),
            "Pixel ({}, {}) = {:?} is not a palette colour",
            x,
            y,
            pixel
        );
    }
    poster
}

/// Assert every pixel of the poster is `color`
pub fn assert_solid(poster: &RgbImage, color: Rgb<u8>) {
    let stray = poster.pixels().filter(|p| **p != color).count();
    assert_eq!(stray, 0, "{} pixels differ from {:?}", stray, color);
}

/// PNG colour type and bit depth from the IHDR chunk
pub fn png_header(path: &Path) -> (u8, u8) {
    let bytes = std::fs::read(path).expect("Failed to read output");
    // Signature (8) + chunk length (4) + "IHDR" (4) + width (4) + height (4)
    let bit_depth = bytes[24];
    let color_type = bytes[25];
    (color_type, bit_depth)
}
