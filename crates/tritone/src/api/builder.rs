//! PosterPipeline builder -- the primary ergonomic entry point for the crate.
//!
//! [`PosterPipeline`] wraps the four poster stages with fluent configuration.

use image::{DynamicImage, GrayImage, RgbImage};

use super::PosterError;
use crate::grayscale::to_grayscale;
use crate::output::{encode_png, PngOptions};
use crate::palette::Palette;
use crate::palette_map::map_to_palette;
use crate::pixelate::pixelate;
use crate::posterize::{posterize_in_place, Thresholds};

/// Working height used for pixelation unless configured otherwise.
pub const DEFAULT_TARGET_HEIGHT: u32 = 500;

/// Three-tone poster pipeline.
///
/// Runs grayscale reduction, posterization, palette mapping and pixelation
/// in that order.
///
/// # Design
///
/// - Constructor requires [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self`, so one pipeline serves any
///   number of images and can be shared between threads
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgb, RgbImage};
/// use tritone::{Palette, PosterPipeline};
///
/// let pipeline = PosterPipeline::new(Palette::default()).target_height(500);
///
/// let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 50, Rgb([100, 100, 100])));
/// let poster = pipeline.render(&photo).unwrap();
///
/// assert_eq!(poster.dimensions(), (100, 50));
/// assert!(poster.pixels().all(|p| *p == Palette::BROWN));
/// ```
#[derive(Debug, Clone)]
pub struct PosterPipeline {
    palette: Palette,
    thresholds: Thresholds,
    target_height: u32,
    png: PngOptions,
}

impl PosterPipeline {
    /// Create a pipeline with the given palette.
    ///
    /// Defaults: thresholds 85/170, target height 500, indexed PNG output.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            thresholds: Thresholds::default(),
            target_height: DEFAULT_TARGET_HEIGHT,
            png: PngOptions::default(),
        }
    }

    /// Set posterization thresholds.
    #[inline]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the pixelation working height.
    #[inline]
    pub fn target_height(mut self, height: u32) -> Self {
        self.target_height = height;
        self
    }

    /// Set PNG encoding options used by [`encode()`](Self::encode).
    #[inline]
    pub fn png_options(mut self, options: PngOptions) -> Self {
        self.png = options;
        self
    }

    /// The palette colours are mapped to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Turn a decoded image into a poster.
    ///
    /// # Errors
    ///
    /// - [`PosterError::EmptyImage`] for zero-sized input
    /// - [`PosterError::InvalidTargetHeight`] if the target height is zero
    pub fn render(&self, img: &DynamicImage) -> Result<RgbImage, PosterError> {
        self.render_gray(to_grayscale(img))
    }

    /// Run the stages after grayscale reduction.
    pub fn render_gray(&self, mut gray: GrayImage) -> Result<RgbImage, PosterError> {
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return Err(PosterError::EmptyImage { width, height });
        }

        posterize_in_place(&mut gray, &self.thresholds);
        let mapped = map_to_palette(&gray, &self.palette)?;
        drop(gray);
        pixelate(&mapped, self.target_height)
    }

    /// Encode a poster produced by this pipeline as PNG bytes.
    pub fn encode(&self, poster: &RgbImage) -> Result<Vec<u8>, PosterError> {
        encode_png(poster, &self.palette, self.png)
    }
}

impl Default for PosterPipeline {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    /// Helper: a horizontal gradient covering all three buckets.
    fn gradient(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| Luma([(x * 255 / (width - 1)) as u8]))
    }

    #[test]
    fn test_new_defaults() {
        let pipeline = PosterPipeline::new(Palette::default());
        assert_eq!(pipeline.thresholds, Thresholds::default());
        assert_eq!(pipeline.target_height, 500);
        assert_eq!(pipeline.palette(), &Palette::default());
    }

    #[test]
    fn test_builder_chaining() {
        let thresholds = Thresholds::new(60, 200).unwrap();
        let pipeline = PosterPipeline::default()
            .thresholds(thresholds)
            .target_height(120);
        assert_eq!(pipeline.thresholds, thresholds);
        assert_eq!(pipeline.target_height, 120);
    }

    #[test]
    fn test_render_gradient_uses_all_three_colours() {
        let pipeline = PosterPipeline::default();
        let poster = pipeline.render_gray(gradient(300, 20)).unwrap();

        assert_eq!(poster.dimensions(), (300, 20));
        assert_eq!(*poster.get_pixel(0, 0), Palette::BLACK);
        assert_eq!(*poster.get_pixel(150, 10), Palette::BROWN);
        assert_eq!(*poster.get_pixel(299, 19), Palette::ORANGE);
    }

    #[test]
    fn test_render_reusable() {
        let pipeline = PosterPipeline::default().target_height(7);
        let img = DynamicImage::ImageLuma8(gradient(64, 64));
        assert_eq!(pipeline.render(&img).unwrap(), pipeline.render(&img).unwrap());
    }

    #[test]
    fn test_render_rejects_empty_image() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert!(matches!(
            PosterPipeline::default().render(&img),
            Err(PosterError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_render_then_encode() {
        let pipeline = PosterPipeline::default();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([250, 250, 250])));
        let poster = pipeline.render(&img).unwrap();
        let bytes = pipeline.encode(&poster).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert!(decoded.pixels().all(|p| *p == Palette::ORANGE));
    }
}
