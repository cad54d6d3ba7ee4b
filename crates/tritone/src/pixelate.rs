//! Pixelation by nearest-neighbour down/up resampling.
//!
//! The image is resampled to a fixed working height (aspect ratio kept),
//! then back to its original size, both times with
//! [`FilterType::Nearest`]. Detail lost in the first step comes back as
//! hard-edged blocks. Nearest sampling copies source pixels and never
//! blends, so the output holds no colour the input did not.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel};

use crate::api::PosterError;

/// Width that keeps the aspect ratio of a `width`x`height` image at
/// `target_height` rows, rounded to the nearest column and at least 1.
pub fn target_width(width: u32, height: u32, target_height: u32) -> u32 {
    let (w, h, th) = (width as u64, height as u64, target_height as u64);
    let rounded = (2 * w * th + h) / (2 * h);
    rounded.clamp(1, u32::MAX as u64) as u32
}

/// Pixelate an image at the given working height.
///
/// When the image is shorter than `target_height` the first pass enlarges
/// it instead; only the ratio matters.
///
/// # Errors
///
/// - [`PosterError::EmptyImage`] if the image has zero width or height
/// - [`PosterError::InvalidTargetHeight`] if `target_height` is zero
pub fn pixelate<P>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    target_height: u32,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, PosterError>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(PosterError::EmptyImage { width, height });
    }
    if target_height == 0 {
        return Err(PosterError::InvalidTargetHeight);
    }

    let work_width = target_width(width, height, target_height);
    tracing::trace!(
        width,
        height,
        work_width,
        work_height = target_height,
        "Pixelating"
    );

    let small = imageops::resize(img, work_width, target_height, FilterType::Nearest);
    Ok(imageops::resize(&small, width, height, FilterType::Nearest))
}
