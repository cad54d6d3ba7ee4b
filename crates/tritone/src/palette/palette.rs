//! Three-colour poster palette.
//!
//! A [`Palette`] holds one sRGB colour per posterization level, ordered from
//! the darkest level (0) to the brightest (255).

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use super::error::{PaletteError, ParseColorError};

/// Number of colours in a poster palette: one per posterization level.
pub const PALETTE_SIZE: usize = 3;

/// A fixed three-entry palette, index-aligned to the posterization levels.
///
/// Index 0 is used for level 0 (shadows), index 1 for level 128 (midtones)
/// and index 2 for level 255 (highlights). The palette is immutable once
/// built, so it can be shared read-only across any number of images.
///
/// # Example
///
/// ```
/// use tritone::Palette;
///
/// let palette = Palette::from_hex(&["#000000", "#8A3A1D", "#FF6B35"]).unwrap();
/// assert_eq!(palette.color(1).0, [138, 58, 29]);
/// assert_eq!(palette, Palette::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb<u8>; PALETTE_SIZE],
}

impl Palette {
    /// Black: the shadow tone of the default palette.
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    /// Brown: the midtone of the default palette.
    pub const BROWN: Rgb<u8> = Rgb([138, 58, 29]);
    /// Orange: the highlight tone of the default palette.
    pub const ORANGE: Rgb<u8> = Rgb([255, 107, 53]);

    /// Create a palette from exactly three colours.
    ///
    /// Colours may repeat; a palette with two equal entries simply merges
    /// those levels in the output.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` does not hold exactly three entries ([`PaletteError::WrongLength`])
    pub fn new(colors: &[Rgb<u8>]) -> Result<Self, PaletteError> {
        let colors: [Rgb<u8>; PALETTE_SIZE] =
            colors.try_into().map_err(|_| PaletteError::WrongLength {
                found: colors.len(),
            })?;

        Ok(Self { colors })
    }

    /// Create a palette from hex colour strings.
    ///
    /// Each string is parsed with [`parse_hex_color`].
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .map(|s| parse_hex_color(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Colour for palette index `index` (0, 1 or 2).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 3`.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb<u8> {
        self.colors[index]
    }

    /// All three colours, darkest level first.
    #[inline]
    pub fn colors(&self) -> &[Rgb<u8>; PALETTE_SIZE] {
        &self.colors
    }

    /// Palette index of the first exact colour match, if any.
    #[inline]
    pub fn index_of(&self, color: Rgb<u8>) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Colours as `#RRGGBB` strings, in palette order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|&c| format_hex_color(c)).collect()
    }
}

impl Default for Palette {
    /// Black, brown and orange.
    fn default() -> Self {
        Self {
            colors: [Self::BLACK, Self::BROWN, Self::ORANGE],
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_strings().join(","))
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse a comma-separated list such as `"#000000,#8A3A1D,#FF6B35"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        Self::from_hex(&parts)
    }
}

/// Parse an sRGB colour from a hex string.
///
/// Supports the following formats:
/// - `#RRGGBB` - standard 6-digit hex with hash
/// - `RRGGBB` - standard 6-digit hex without hash
/// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
/// - `RGB` - shorthand 3-digit hex without hash
///
/// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
///
/// ```
/// use tritone::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#FF6B35").unwrap().0, [255, 107, 53]);
/// assert_eq!(parse_hex_color("f00").unwrap().0, [255, 0, 0]);
/// ```
pub fn parse_hex_color(s: &str) -> Result<Rgb<u8>, ParseColorError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    if !s.is_ascii() {
        return Err(ParseColorError::InvalidLength);
    }

    match s.len() {
        3 => {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            let r = u8::from_str_radix(&s[0..1], 16)? * 17;
            let g = u8::from_str_radix(&s[1..2], 16)? * 17;
            let b = u8::from_str_radix(&s[2..3], 16)? * 17;
            Ok(Rgb([r, g, b]))
        }
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16)?;
            let g = u8::from_str_radix(&s[2..4], 16)?;
            let b = u8::from_str_radix(&s[4..6], 16)?;
            Ok(Rgb([r, g, b]))
        }
        _ => Err(ParseColorError::InvalidLength),
    }
}

/// Format a colour as an uppercase `#RRGGBB` string.
pub fn format_hex_color(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02X}{g:02X}{b:02X}")
}
