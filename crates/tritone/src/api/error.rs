//! Unified error type for the tritone public API.
//!
//! [`PosterError`] covers every way a single image can fail to become a
//! poster, so callers can isolate failures per file.

use std::fmt;

use crate::palette::PaletteError;
use crate::posterize::ThresholdError;

/// Unified error type for the tritone public API.
///
/// # Example
///
/// ```
/// use tritone::{PosterError, Palette};
///
/// fn create_palette() -> Result<Palette, PosterError> {
///     let palette = Palette::from_hex(&["#000000", "#8A3A1D", "#FF6B35"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum PosterError {
    /// Source image could not be read or decoded
    Load(image::ImageError),
    /// Image has zero width or zero height
    EmptyImage {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },
    /// Pixelation target height of zero
    InvalidTargetHeight,
    /// A sample outside {0, 128, 255} reached the palette mapper.
    ///
    /// This is an internal contract violation: the posterizer never emits
    /// such values.
    UnexpectedLevel {
        /// Column of the offending sample
        x: u32,
        /// Row of the offending sample
        y: u32,
        /// The offending sample value
        value: u8,
    },
    /// A pixel that is not a palette colour reached the indexed PNG encoder
    ColorNotInPalette {
        /// Column of the offending pixel
        x: u32,
        /// Row of the offending pixel
        y: u32,
        /// The offending colour
        rgb: [u8; 3],
    },
    /// PNG encoding failed
    Encode(String),
    /// Palette validation error
    Palette(PaletteError),
    /// Posterization thresholds are unusable
    Thresholds(ThresholdError),
}

impl fmt::Display for PosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosterError::Load(err) => write!(f, "failed to load image: {}", err),
            PosterError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            PosterError::InvalidTargetHeight => {
                write!(f, "pixelation target height must be at least 1")
            }
            PosterError::UnexpectedLevel { x, y, value } => write!(
                f,
                "unexpected posterized value {} at ({}, {}), expected 0, 128 or 255",
                value, x, y
            ),
            PosterError::ColorNotInPalette { x, y, rgb } => write!(
                f,
                "pixel ({}, {}) has color #{:02X}{:02X}{:02X} which is not in the palette",
                x, y, rgb[0], rgb[1], rgb[2]
            ),
            PosterError::Encode(msg) => write!(f, "PNG encode error: {}", msg),
            PosterError::Palette(err) => write!(f, "palette error: {}", err),
            PosterError::Thresholds(err) => write!(f, "threshold error: {}", err),
        }
    }
}

impl std::error::Error for PosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PosterError::Load(err) => Some(err),
            PosterError::Palette(err) => Some(err),
            PosterError::Thresholds(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for PosterError {
    fn from(err: image::ImageError) -> Self {
        PosterError::Load(err)
    }
}

impl From<PaletteError> for PosterError {
    fn from(err: PaletteError) -> Self {
        PosterError::Palette(err)
    }
}

impl From<ThresholdError> for PosterError {
    fn from(err: ThresholdError) -> Self {
        PosterError::Thresholds(err)
    }
}

impl From<png::EncodingError> for PosterError {
    fn from(err: png::EncodingError) -> Self {
        PosterError::Encode(err.to_string())
    }
}
