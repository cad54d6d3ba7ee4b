//! Three-level posterization.
//!
//! Luminance is bucketed into shadows, midtones and highlights:
//!
//! ```text
//!   0 ........ low-1 | low ........ high-1 | high ........ 255
//!         -> 0       |        -> 128       |       -> 255
//! ```
//!
//! The output levels are fixed. The thresholds default to 85 and 170 and
//! must keep every output level mapped to itself, so posterizing an already
//! posterized image is a no-op.

use std::fmt;

use image::GrayImage;

/// The three output levels, darkest first. Index `i` here is palette index `i`.
pub const LEVELS: [u8; 3] = [0, 128, 255];

/// Default lower threshold: values below it become 0.
pub const DEFAULT_LOW: u8 = 85;
/// Default upper threshold: values at or above it become 255.
pub const DEFAULT_HIGH: u8 = 170;

/// Bucket boundaries for [`posterize`].
///
/// `low` is the first value mapped to 128, `high` the first value mapped
/// to 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    low: u8,
    high: u8,
}

/// Error type for unusable thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdError {
    /// `low` must be in `1..=128` so that 0 stays 0 and 128 stays 128
    LowOutOfRange {
        /// The rejected lower threshold
        low: u8,
    },
    /// `high` must be in `129..=255` so that 128 stays 128
    HighOutOfRange {
        /// The rejected upper threshold
        high: u8,
    },
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdError::LowOutOfRange { low } => {
                write!(f, "low threshold {} must be between 1 and 128", low)
            }
            ThresholdError::HighOutOfRange { high } => {
                write!(f, "high threshold {} must be between 129 and 255", high)
            }
        }
    }
}

impl std::error::Error for ThresholdError {}

impl Thresholds {
    /// Create thresholds, rejecting any pair that would move an output level.
    ///
    /// ```
    /// use tritone::Thresholds;
    ///
    /// assert!(Thresholds::new(85, 170).is_ok());
    /// assert!(Thresholds::new(0, 170).is_err());
    /// assert!(Thresholds::new(85, 128).is_err());
    /// ```
    pub fn new(low: u8, high: u8) -> Result<Self, ThresholdError> {
        if low == 0 || low > LEVELS[1] {
            return Err(ThresholdError::LowOutOfRange { low });
        }
        if high <= LEVELS[1] {
            return Err(ThresholdError::HighOutOfRange { high });
        }
        Ok(Self { low, high })
    }

    /// First value mapped to the midtone level.
    #[inline]
    pub fn low(&self) -> u8 {
        self.low
    }

    /// First value mapped to the highlight level.
    #[inline]
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Palette index (0, 1 or 2) of a luminance value.
    #[inline]
    pub fn bucket(&self, value: u8) -> usize {
        if value < self.low {
            0
        } else if value < self.high {
            1
        } else {
            2
        }
    }

    /// Posterized level of a single luminance value.
    #[inline]
    pub fn level(&self, value: u8) -> u8 {
        LEVELS[self.bucket(value)]
    }

    /// Lookup table mapping every luminance value to its level.
    pub fn lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (value, slot) in lut.iter_mut().enumerate() {
            *slot = self.level(value as u8);
        }
        lut
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

/// Posterize a grayscale image into the levels 0, 128 and 255.
///
/// Returns a new image of the same dimensions.
pub fn posterize(img: &GrayImage, thresholds: &Thresholds) -> GrayImage {
    let mut out = img.clone();
    posterize_in_place(&mut out, thresholds);
    out
}

/// Posterize a grayscale image without allocating.
pub fn posterize_in_place(img: &mut GrayImage, thresholds: &Thresholds) {
    let lut = thresholds.lut();
    for sample in img.iter_mut() {
        *sample = lut[*sample as usize];
    }
}
