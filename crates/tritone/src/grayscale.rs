//! Image decoding and grayscale reduction.
//!
//! First stage of the poster pipeline: any colour (or already gray) raster
//! becomes a single-channel [`GrayImage`] of the same size.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma};

use crate::api::PosterError;

/// ITU-R 601-2 luma weights in 16.16 fixed point. They sum to 65536, so a
/// neutral gray pixel maps to exactly its own value.
const LUMA_R: u32 = 19595;
const LUMA_G: u32 = 38470;
const LUMA_B: u32 = 7471;

/// Perceptual luminance of one sRGB pixel.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + 0x8000) >> 16) as u8
}

/// Reduce an image to single-channel luminance.
///
/// 8-bit gray inputs are returned as-is. Everything else is converted to
/// 8-bit RGB first; alpha is dropped, not composited.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    if let DynamicImage::ImageLuma8(gray) = img {
        return gray.clone();
    }

    let rgb = img.to_rgb8();
    let mut gray = GrayImage::new(rgb.width(), rgb.height());
    for (dst, px) in gray.pixels_mut().zip(rgb.pixels()) {
        let [r, g, b] = px.0;
        *dst = Luma([luminance(r, g, b)]);
    }
    gray
}

/// Load an image file (PNG or JPEG) and reduce it to grayscale.
///
/// # Errors
///
/// Returns [`PosterError::Load`] if the file cannot be opened, its format is
/// not recognised, or the data is corrupt.
pub fn load_grayscale(path: &Path) -> Result<GrayImage, PosterError> {
    let img = load_image(path)?;
    Ok(to_grayscale(&img))
}

/// Decode raw image bytes and reduce them to grayscale.
///
/// # Errors
///
/// Returns [`PosterError::Load`] for empty, unrecognised or corrupt input.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage, PosterError> {
    let img = image::load_from_memory(bytes)?;
    Ok(to_grayscale(&img))
}

/// Open and decode an image file, guessing the format from its contents.
pub fn load_image(path: &Path) -> Result<DynamicImage, PosterError> {
    let img = image::ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded image"
    );
    Ok(img)
}
