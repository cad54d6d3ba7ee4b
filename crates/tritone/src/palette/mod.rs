//! Poster palette and colour parsing.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{format_hex_color, parse_hex_color, Palette, PALETTE_SIZE};
