//! PNG encoding for finished posters.
//!
//! Two layouts are supported:
//! - [`PngFormat::Indexed`] → color type 3, 2-bit, PLTE with the 3 palette colours
//! - [`PngFormat::Rgb`] → truecolor, 8-bit
//!
//! A poster only ever contains palette colours, so the indexed layout is
//! lossless and roughly twelve times smaller before compression.

use std::io::Cursor;

use image::RgbImage;

use crate::api::PosterError;
use crate::palette::Palette;

/// PNG pixel layout for written posters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngFormat {
    /// Palette-indexed, 2 bits per pixel
    #[default]
    Indexed,
    /// 8-bit RGB truecolor
    Rgb,
}

/// PNG encoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngOptions {
    /// Pixel layout
    pub format: PngFormat,
    /// Re-compress with oxipng after encoding
    pub optimize: bool,
}

/// Encode a poster as PNG bytes.
///
/// # Errors
///
/// - [`PosterError::ColorNotInPalette`] if `format` is indexed and a pixel
///   is not one of the palette colours
/// - [`PosterError::Encode`] if the PNG encoder fails
pub fn encode_png(
    img: &RgbImage,
    palette: &Palette,
    options: PngOptions,
) -> Result<Vec<u8>, PosterError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(PosterError::EmptyImage { width, height });
    }

    let png_bytes = match options.format {
        PngFormat::Indexed => {
            let indices = palette_indices(img, palette)?;
            let plte: Vec<u8> = palette.colors().iter().flat_map(|c| c.0).collect();
            let packed = pack_nbits(&indices, width, 2);
            write_png(
                width,
                height,
                png::ColorType::Indexed,
                png::BitDepth::Two,
                Some(&plte),
                &packed,
            )?
        }
        PngFormat::Rgb => write_png(
            width,
            height,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            img.as_raw(),
        )?,
    };

    if !options.optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            Ok(png_bytes)
        }
    }
}

/// Palette index of every pixel, row-major.
fn palette_indices(img: &RgbImage, palette: &Palette) -> Result<Vec<u8>, PosterError> {
    img.enumerate_pixels()
        .map(|(x, y, px)| {
            palette
                .index_of(*px)
                .map(|i| i as u8)
                .ok_or(PosterError::ColorNotInPalette { x, y, rgb: px.0 })
        })
        .collect()
}

/// Encode pixel data that is already laid out as PNG rows.
fn write_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, PosterError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Default);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(data)?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
