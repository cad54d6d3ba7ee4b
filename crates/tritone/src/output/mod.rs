//! Output encoding for finished posters.
//!
//! [`encode_png`] turns a palette-mapped [`image::RgbImage`] into PNG bytes,
//! either palette-indexed (the default) or as plain RGB.

mod encode;

pub use encode::{encode_png, PngFormat, PngOptions};
