//! Palette mapping: posterized levels to colour swatches.
//!
//! Mapping is strict. Every sample must be one of the posterization levels;
//! anything else means the upstream posterizer is broken, and is reported
//! as [`PosterError::UnexpectedLevel`] instead of being folded into the
//! nearest swatch.

use image::{GrayImage, RgbImage};

use crate::api::PosterError;
use crate::palette::Palette;
use crate::posterize::LEVELS;

/// Lookup table from sample value to colour; `None` marks invalid samples.
fn level_lut(palette: &Palette) -> [Option<[u8; 3]>; 256] {
    let mut lut = [None; 256];
    for (index, &level) in LEVELS.iter().enumerate() {
        lut[level as usize] = Some(palette.color(index).0);
    }
    lut
}

/// Replace each posterized sample with its palette colour.
///
/// Level 0 becomes `palette[0]`, 128 becomes `palette[1]` and 255 becomes
/// `palette[2]`. The output has the same dimensions as the input.
///
/// # Errors
///
/// Returns [`PosterError::UnexpectedLevel`] for the first sample (row-major)
/// that is not 0, 128 or 255.
pub fn map_to_palette(img: &GrayImage, palette: &Palette) -> Result<RgbImage, PosterError> {
    let lut = level_lut(palette);
    let (width, height) = img.dimensions();
    let mut out = RgbImage::new(width, height);

    for (i, (dst, &value)) in out.chunks_exact_mut(3).zip(img.iter()).enumerate() {
        match lut[value as usize] {
            Some(rgb) => dst.copy_from_slice(&rgb),
            None => {
                let i = i as u32;
                return Err(PosterError::UnexpectedLevel {
                    x: i % width,
                    y: i / width,
                    value,
                });
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn test_levels_map_to_palette_entries() {
        let palette = Palette::default();
        let img = GrayImage::from_fn(3, 1, |x, _| Luma([LEVELS[x as usize]]));
        let out = map_to_palette(&img, &palette).unwrap();

        assert_eq!(*out.get_pixel(0, 0), Palette::BLACK);
        assert_eq!(*out.get_pixel(1, 0), Palette::BROWN);
        assert_eq!(*out.get_pixel(2, 0), Palette::ORANGE);
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(&[Rgb([1, 2, 3]), Rgb([4, 5, 6]), Rgb([7, 8, 9])]).unwrap();
        let img = GrayImage::from_pixel(2, 2, Luma([128]));
        let out = map_to_palette(&img, &palette).unwrap();
        assert!(out.pixels().all(|p| *p == Rgb([4, 5, 6])));
    }

    #[test]
    fn test_unexpected_level_is_an_error() {
        let mut img = GrayImage::from_pixel(4, 3, Luma([0]));
        img.put_pixel(2, 1, Luma([170]));
        img.put_pixel(3, 2, Luma([1]));

        match map_to_palette(&img, &Palette::default()) {
            Err(PosterError::UnexpectedLevel { x, y, value }) => {
                assert_eq!((x, y, value), (2, 1, 170));
            }
            other => panic!("Expected UnexpectedLevel, got {other:?}"),
        }
    }

    #[test]
    fn test_preserves_dimensions() {
        let img = GrayImage::from_pixel(9, 4, Luma([255]));
        let out = map_to_palette(&img, &Palette::default()).unwrap();
        assert_eq!(out.dimensions(), (9, 4));
    }

    #[test]
    fn test_empty_image_maps_to_empty_image() {
        let img = GrayImage::new(0, 0);
        let out = map_to_palette(&img, &Palette::default()).unwrap();
        assert_eq!(out.dimensions(), (0, 0));
    }
}
