#![allow(clippy::module_inception)]

//! tritone: three-tone posters from photographs
//!
//! Turns any image into a blocky poster using three flat colours. The
//! pipeline has four stages, always run in this order:
//!
//! ```text
//! DynamicImage (PNG / JPEG)
//!     |
//!     v
//! [grayscale]      ITU-R 601-2 luma, one channel
//!     |
//!     v
//! [posterize]      < 85 -> 0, < 170 -> 128, else 255
//!     |
//!     v
//! [palette_map]    0 -> palette[0], 128 -> palette[1], 255 -> palette[2]
//!     |
//!     v
//! [pixelate]       nearest-neighbour down to a fixed height, then back up
//!     |
//!     v
//! RgbImage (same size as the input)
//! ```
//!
//! No stage keeps state between images. The only shared input is the
//! [`Palette`] and [`Thresholds`], which are immutable.
//!
//! # Quick Start
//!
//! ```
//! use image::{DynamicImage, Luma, GrayImage};
//! use tritone::{Palette, PosterPipeline};
//!
//! let pipeline = PosterPipeline::new(Palette::default());
//!
//! let photo = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 20, Luma([0])));
//! let poster = pipeline.render(&photo).unwrap();
//! assert!(poster.pixels().all(|p| *p == Palette::BLACK));
//!
//! let png_bytes = pipeline.encode(&poster).unwrap();
//! assert_eq!(&png_bytes[1..4], b"PNG");
//! ```
//!
//! # Individual Stages
//!
//! Each stage is also available on its own:
//!
//! ```
//! use image::{GrayImage, Luma};
//! use tritone::{map_to_palette, pixelate, posterize, Palette, Thresholds};
//!
//! let gray = GrayImage::from_pixel(10, 10, Luma([100]));
//! let levels = posterize(&gray, &Thresholds::default());
//! assert!(levels.pixels().all(|p| p.0[0] == 128));
//!
//! let mapped = map_to_palette(&levels, &Palette::default()).unwrap();
//! let blocky = pixelate(&mapped, 500).unwrap();
//! assert_eq!(blocky.dimensions(), (10, 10));
//! ```
//!
//! # Strict Palette Mapping
//!
//! [`map_to_palette`] refuses samples other than 0, 128 and 255 with
//! [`PosterError::UnexpectedLevel`]. The posterizer never produces them, so
//! hitting this error means a stage upstream is broken; quietly painting
//! such pixels with the brightest colour would hide that.

pub mod api;
pub mod grayscale;
pub mod output;
pub mod palette;
pub mod palette_map;
pub mod pixelate;
pub mod posterize;


pub use api::{PosterError, PosterPipeline, DEFAULT_TARGET_HEIGHT};
pub use grayscale::{decode_grayscale, load_grayscale, load_image, luminance, to_grayscale};
pub use output::{encode_png, PngFormat, PngOptions};
pub use palette::{format_hex_color, parse_hex_color, Palette, PaletteError, ParseColorError};
pub use palette_map::map_to_palette;
pub use pixelate::{pixelate, target_width};
pub use posterize::{posterize, posterize_in_place, ThresholdError, Thresholds, LEVELS};
